mod reconciler;
mod sync_request;
