// Lexigraph: cross-language vocabulary similarity.
//
// This is the library root. A topic (one word list) is translated into a
// handful of languages, every language pair is scored by edit-distance
// similarity, and the scores become a weighted language graph.

pub mod config;
pub mod graph;
pub mod languages;
pub mod menu;
pub mod output;
pub mod pipeline;
pub mod similarity;
pub mod translate;
pub mod wordlist;
