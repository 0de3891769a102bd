//! Scripted collaborator doubles.
//!
//! In-process implementations of the scoring collaborators that answer from
//! configured data, so recommenders can run without the remote services.
//!
//! # Example
//!
//! ```ignore
//! let vectorizer = ScriptedVectorizer::new(vec![123.0; 4])
//!     .with_vector("uimahalli", vec![1.0, 0.0, 0.0, 0.0]);
//! let lexical = ScriptedLexicalSearch::new()
//!     .with_hit("S1", 58.0)
//!     .with_error(CollaboratorError::unavailable("lexical-text-search", 503, "busy"));
//! ```

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::foundation::ServiceId;
use crate::domain::service::Language;
use crate::ports::{CollaboratorError, LexicalHit, LexicalSearch, TextVectorizer};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Embedding double: per-text vectors with a default.
#[derive(Debug, Clone)]
pub struct ScriptedVectorizer {
    default_vector: Vec<f64>,
    vectors: HashMap<String, Vec<f64>>,
    /// Errors returned before any vector (consumed in order).
    errors: Arc<Mutex<VecDeque<CollaboratorError>>>,
    /// Texts received, for verification.
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedVectorizer {
    pub fn new(default_vector: Vec<f64>) -> Self {
        Self {
            default_vector,
            vectors: HashMap::new(),
            errors: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answers `text` with `vector` instead of the default.
    pub fn with_vector(mut self, text: impl Into<String>, vector: Vec<f64>) -> Self {
        self.vectors.insert(text.into(), vector);
        self
    }

    /// Queues an error for the next call.
    pub fn with_error(self, error: CollaboratorError) -> Self {
        lock(&self.errors).push_back(error);
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }
}

#[async_trait]
impl TextVectorizer for ScriptedVectorizer {
    async fn vectorize(&self, text: &str) -> Result<Vec<f64>, CollaboratorError> {
        lock(&self.calls).push(text.to_string());

        if let Some(err) = lock(&self.errors).pop_front() {
            return Err(err);
        }

        Ok(self
            .vectors
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.default_vector.clone()))
    }
}

/// One recorded lexical search call.
#[derive(Debug, Clone, PartialEq)]
pub struct LexicalCall {
    pub text: String,
    pub language: Language,
    pub top_k: usize,
}

/// Lexical search double: the same hit list for every query.
#[derive(Debug, Clone, Default)]
pub struct ScriptedLexicalSearch {
    hits: Vec<LexicalHit>,
    errors: Arc<Mutex<VecDeque<CollaboratorError>>>,
    calls: Arc<Mutex<Vec<LexicalCall>>>,
}

impl ScriptedLexicalSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scored service to every answer.
    ///
    /// Blank ids are ignored.
    pub fn with_hit(mut self, id: &str, score: f64) -> Self {
        if let Ok(id) = ServiceId::new(id) {
            self.hits.push(LexicalHit::new(id, score));
        }
        self
    }

    /// Queues an error for the next call.
    pub fn with_error(self, error: CollaboratorError) -> Self {
        lock(&self.errors).push_back(error);
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn calls(&self) -> Vec<LexicalCall> {
        lock(&self.calls).clone()
    }
}

#[async_trait]
impl LexicalSearch for ScriptedLexicalSearch {
    async fn search(
        &self,
        text: &str,
        language: Language,
        top_k: usize,
    ) -> Result<Vec<LexicalHit>, CollaboratorError> {
        lock(&self.calls).push(LexicalCall {
            text: text.to_string(),
            language,
            top_k,
        });

        if let Some(err) = lock(&self.errors).pop_front() {
            return Err(err);
        }

        let mut hits = self.hits.clone();
        if top_k > 0 {
            hits.sort_by(|a, b| b.score.total_cmp(&a.score));
            hits.truncate(top_k);
        }
        Ok(hits)
    }
}
