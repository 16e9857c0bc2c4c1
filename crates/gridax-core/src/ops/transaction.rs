use super::document::Document;

/// Bounded atomic edit scope over a Document
///
/// Stands in for the host's transaction object: every mutation a command
/// makes goes through one scope, and the scope either commits as a whole
/// or restores the document to its pre-scope state. Rollback is the
/// default path: dropping an uncommitted transaction (including via an
/// early `?` return) puts the snapshot back, so a failure inside the
/// scope can never leave a partial mutation behind.
///
/// Scopes do not nest; one command invocation opens at most one.
#[derive(Debug)]
pub struct Transaction<'d> {
    doc: &'d mut Document,
    backup: Option<Document>,
    name: String,
}

impl<'d> Transaction<'d> {
    /// Open a scope over the document, snapshotting its current state
    pub fn start(doc: &'d mut Document, name: impl Into<String>) -> Self {
        let backup = doc.clone();
        Self {
            doc,
            backup: Some(backup),
            name: name.into(),
        }
    }

    /// The name this scope was opened with
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The document handle mutations go through
    pub fn document(&mut self) -> &mut Document {
        self.doc
    }

    /// Keep all mutations made inside the scope
    pub fn commit(mut self) {
        self.backup = None;
    }

    /// Discard all mutations made inside the scope
    ///
    /// Equivalent to dropping the transaction; provided for call sites
    /// that want the rollback to be explicit.
    pub fn roll_back(self) {}
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if let Some(backup) = self.backup.take() {
            *self.doc = backup;
        }
    }
}
