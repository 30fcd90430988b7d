//! Error handler routing teloxide errors into the event dispatch

use futures::future::BoxFuture;
use std::fmt::Display;
use std::sync::Arc;
use teloxide::error_handlers::ErrorHandler;

use super::events::{BotContext, BotEvent};

/// Logs transport and handler errors; dispatching continues afterwards
pub struct TransportErrorHandler {
    context: Arc<BotContext>,
}

impl TransportErrorHandler {
    pub fn new(context: Arc<BotContext>) -> Arc<Self> {
        Arc::new(Self { context })
    }
}

impl<E> ErrorHandler<E> for TransportErrorHandler
where
    E: Display + Send + 'static,
{
    fn handle_error(self: Arc<Self>, error: E) -> BoxFuture<'static, ()> {
        let description = error.to_string();
        Box::pin(async move {
            self.context.handle(BotEvent::TransportError { description });
        })
    }
}
