use crate::routing::{GlobalErrorSink, RoutedError};
use crate::types::ApiErrorItem;

/// Clear the global slot, then show the first global error if there is one.
///
/// Only one global error is surfaced per pass even when the API sends several;
/// there is no stacked notification area to hold the rest.
pub fn route_global(global_errors: &[&ApiErrorItem], sink: Option<&mut dyn GlobalErrorSink>) {
    let Some(sink) = sink else {
        return;
    };
    sink.set_global_error(None);
    if let Some(first) = global_errors.first() {
        tracing::trace!(
            code = %first.code,
            dropped = global_errors.len() - 1,
            "routing global error"
        );
        sink.set_global_error(Some(RoutedError::Api((*first).clone())));
    }
}
