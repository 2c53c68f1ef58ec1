// Translation — trait-based abstraction for swappable providers.
//
// The Translator trait defines the interface. GoogleTranslator implements it
// against the public Google Translate endpoint; IdentityTranslator keeps words
// as-is for offline runs. Per-word failures never escape: the word is kept
// untranslated and the run continues.

pub mod google;
pub mod rate_limiter;
pub mod traits;
