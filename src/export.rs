//! Token export pipeline.
//!
//! [`export_tokens`] is the pure engine: it turns already fetched variables
//! into a [`TokenDocument`] for one mode and format. [`run_export`] wraps it
//! with the host round-trips (collection re-fetch, batched variable fetch)
//! and the selection checks done before any work starts.

use thiserror::Error;

use crate::document::{ExportOutput, TokenDocument};
use crate::format::{ExportFormat, Generate, Generator, ValueFormat};
use crate::minimize::{MinimizedSetOptions, minimize};
use crate::model::{Mode, VariableCollection};
use crate::resolve::Resolver;
use crate::source::{FetchedVariables, VariableSource, fetch_for_export};

pub const DEFAULT_SELECTOR: &str = ":root";

/// Reasons an export is aborted. The messages are the notices shown to the
/// user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("Please select a collection and mode to export.")]
    SelectionMissing,

    #[error("Failed to fetch variable collection.")]
    CollectionFetchFailed,

    #[error("Please select a structure mode and value mode for the minimized set.")]
    MinimizerModesUnset,

    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    #[error("Unknown value format: {0}")]
    UnknownValueFormat(String),
}

/// What the user asked to export.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub collection: Option<VariableCollection>,
    pub mode: Option<Mode>,
    pub format: ExportFormat,
    pub value_format: ValueFormat,
    /// Only read for [`ExportFormat::MinimizedSet`].
    pub minimized: Option<MinimizedSetOptions>,
    /// Rule selector of the CSS block.
    pub selector: String,
}

impl ExportRequest {
    pub fn new(collection: VariableCollection, mode: Mode, format: ExportFormat) -> Self {
        Self {
            collection: Some(collection),
            mode: Some(mode),
            format,
            value_format: ValueFormat::default(),
            minimized: None,
            selector: DEFAULT_SELECTOR.to_string(),
        }
    }

    pub fn with_value_format(mut self, value_format: ValueFormat) -> Self {
        self.value_format = value_format;
        self
    }

    pub fn with_minimized(mut self, options: MinimizedSetOptions) -> Self {
        self.minimized = Some(options);
        self
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    fn selection(&self) -> Result<(&VariableCollection, &Mode), ExportError> {
        match (&self.collection, &self.mode) {
            (Some(collection), Some(mode)) if mode.is_set() => Ok((collection, mode)),
            _ => Err(ExportError::SelectionMissing),
        }
    }
}

/// Build the token document for already fetched variables.
pub fn export_tokens(
    fetched: &FetchedVariables,
    request: &ExportRequest,
) -> Result<ExportOutput, ExportError> {
    let (_, mode) = request.selection()?;

    let Some(generator) = Generator::for_format(request.format, &request.selector) else {
        let options = request.minimized.clone().unwrap_or_default();
        let minimized = minimize(&fetched.members, &options)?;
        return Ok(ExportOutput {
            format: request.format,
            token_count: minimized.tokens.len(),
            document: TokenDocument::Json(minimized.tokens),
            skipped: minimized.skipped,
        });
    };

    let resolver = Resolver::new(
        fetched.all(),
        &fetched.collections,
        request.format,
        request.value_format,
    );
    let resolution = resolver.resolve_all(&fetched.members, mode);
    let document = generator.generate(&resolution.tokens);

    let token_count = if request.format.is_nested() {
        resolution.tokens.len()
    } else {
        document.len()
    };

    Ok(ExportOutput {
        format: request.format,
        document,
        token_count,
        skipped: resolution.skipped,
    })
}

/// Run a full export against the host source.
///
/// The collection is fetched again by id so the export sees the current
/// variable list rather than the one the selection was made from.
pub async fn run_export<S>(source: &S, request: &ExportRequest) -> Result<ExportOutput, ExportError>
where
    S: VariableSource + ?Sized,
{
    let (selected, _) = request.selection()?;

    let collection = match source.collection_by_id(&selected.id).await {
        Ok(Some(collection)) => collection,
        Ok(None) => return Err(ExportError::CollectionFetchFailed),
        Err(err) => {
            tracing::warn!(collection = %selected.id, "Failed to fetch variable collection: {:#}", err);
            return Err(ExportError::CollectionFetchFailed);
        }
    };

    let fetched = fetch_for_export(source, &collection).await;
    let output = export_tokens(&fetched, request)?;

    tracing::debug!(
        format = %output.format,
        tokens = output.token_count,
        skipped = output.skipped.len(),
        "export finished"
    );

    Ok(output)
}
