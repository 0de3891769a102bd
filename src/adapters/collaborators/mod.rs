//! Scoring collaborator adapters.
//!
//! - `HttpTextVectorizer` / `HttpLexicalSearch` - reqwest clients for the
//!   embedding and BM25 services
//! - `ScriptedVectorizer` / `ScriptedLexicalSearch` - in-process doubles

mod http;
mod lexical;
mod scripted;
mod vectorizer;

pub use http::HttpCollaboratorConfig;
pub use lexical::HttpLexicalSearch;
pub use scripted::{LexicalCall, ScriptedLexicalSearch, ScriptedVectorizer};
pub use vectorizer::HttpTextVectorizer;
