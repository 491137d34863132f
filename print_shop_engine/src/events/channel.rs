//! Simple stateless pub-sub event handler
//!
//! This module provides a small hook system that lets components subscribe to engine events and react to them. The
//! handler is stateless: subscribers receive the event itself and nothing else. Handlers may be async; each event is
//! dispatched on its own task so a slow subscriber cannot stall the channel.
use std::{future::Future, pin::Pin, sync::Arc};

use log::*;
use tokio::{sync::mpsc, task::JoinSet};

pub type Handler<E> = Arc<dyn Fn(E) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

pub struct EventHandler<E: Send + Sync + 'static> {
    listener: mpsc::Receiver<E>,
    sender: mpsc::Sender<E>,
    handler: Handler<E>,
}

impl<E: Send + Sync + 'static> EventHandler<E> {
    pub fn new(buffer_size: usize, handler: Handler<E>) -> Self {
        let (sender, receiver) = mpsc::channel(buffer_size);
        Self { listener: receiver, sender, handler }
    }

    pub fn subscribe(&self) -> EventProducer<E> {
        EventProducer::new(self.sender.clone())
    }

    /// Runs the dispatch loop until every producer has been dropped, then waits for in-flight handler invocations to
    /// finish.
    pub async fn start_handler(mut self) {
        debug!("📬️ Starting event handler");
        // Drop the internal sender so the loop ends as soon as the last subscriber is dropped
        drop(self.sender);
        let mut jobs = JoinSet::new();
        while let Some(event) = self.listener.recv().await {
            trace!("📬️ Handling event");
            let handler = Arc::clone(&self.handler);
            jobs.spawn(async move {
                (handler)(event).await;
                trace!("📬️ Event handled");
            });
            // Reap already-finished invocations so the set does not grow with the event count
            while jobs.try_join_next().is_some() {}
        }
        while let Some(result) = jobs.join_next().await {
            if let Err(e) = result {
                warn!("📬️ An event handler invocation panicked: {e}. Continuing with the remaining events.");
            }
        }
        debug!("📬️ Event handler has shut down");
    }
}

#[derive(Clone)]
pub struct EventProducer<E: Send + Sync> {
    sender: mpsc::Sender<E>,
}

impl<E: Send + Sync> EventProducer<E> {
    pub fn new(sender: mpsc::Sender<E>) -> Self {
        Self { sender }
    }

    pub async fn publish_event(&self, event: E) {
        if let Err(e) = self.sender.send(event).await {
            error!("📬️ Failed to send event: {e}");
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicU64, Ordering};

    use super::*;

    #[tokio::test]
    async fn events_from_all_producers_are_handled() {
        let _ = env_logger::try_init();
        let count = Arc::new(AtomicU64::new(0));
        let c2 = count.clone();
        let handler = Arc::new(move |v: u64| {
            let count = count.clone();
            Box::pin(async move {
                debug!("Handler received {v}");
                let _ = count.fetch_add(v, Ordering::SeqCst);
                tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
            }) as Pin<Box<dyn Future<Output = ()> + Send>>
        });
        let event_handler = EventHandler::new(4, handler);
        let producer_1 = event_handler.subscribe();
        let producer_2 = event_handler.subscribe();
        tokio::spawn(async move {
            for i in 0..5u64 {
                producer_1.publish_event(i * 2 + 1).await;
            }
        });
        tokio::spawn(async move {
            for i in 0..5u64 {
                producer_2.publish_event(i * 2).await;
            }
        });

        event_handler.start_handler().await;
        assert_eq!(c2.load(Ordering::SeqCst), 45);
    }
}
