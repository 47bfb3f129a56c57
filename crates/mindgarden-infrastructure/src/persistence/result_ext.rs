use mindgarden_domain::shared::DomainError;

/// Conversion of `sqlx` failures into domain errors, tagged with what was being attempted.
pub trait ResultExt<T> {
    /// Unique violations become `Conflict`, foreign-key violations `DataIntegrity`,
    /// everything else `Repository`.
    fn to_repo_err(self, context: &str) -> Result<T, DomainError>;
}

impl<T> ResultExt<T> for Result<T, sqlx::Error> {
    fn to_repo_err(self, context: &str) -> Result<T, DomainError> {
        self.map_err(|e| map_sqlx_error(e, context))
    }
}

fn map_sqlx_error(error: sqlx::Error, context: &str) -> DomainError {
    if let sqlx::Error::Database(db_err) = &error {
        if db_err.is_unique_violation() {
            return DomainError::Conflict(format!("{context}: already exists"));
        }
        if db_err.is_foreign_key_violation() {
            return DomainError::DataIntegrity(format!("{context}: {}", db_err.message()));
        }
    }
    DomainError::Repository(format!("{context}: {error}"))
}
