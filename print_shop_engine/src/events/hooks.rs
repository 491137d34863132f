use std::{future::Future, pin::Pin, sync::Arc};

use crate::events::{EntityMutatedEvent, EventHandler, EventProducer, Handler};

#[derive(Default, Clone)]
pub struct EventProducers {
    pub entity_mutated_producer: Vec<EventProducer<EntityMutatedEvent>>,
}

pub struct EventHandlers {
    pub on_entity_mutated: Option<EventHandler<EntityMutatedEvent>>,
}

impl EventHandlers {
    pub fn new(buffer_size: usize, hooks: EventHooks) -> Self {
        let on_entity_mutated = hooks.on_entity_mutated.map(|f| EventHandler::new(buffer_size, f));
        Self { on_entity_mutated }
    }

    pub fn producers(&self) -> EventProducers {
        let mut result = EventProducers::default();
        if let Some(handler) = &self.on_entity_mutated {
            result.entity_mutated_producer.push(handler.subscribe());
        }
        result
    }

    pub async fn start_handlers(self) {
        if let Some(handler) = self.on_entity_mutated {
            tokio::spawn(async move {
                handler.start_handler().await;
            });
        }
    }
}

#[derive(Default, Clone)]
pub struct EventHooks {
    pub on_entity_mutated: Option<Handler<EntityMutatedEvent>>,
}

impl EventHooks {
    pub fn on_entity_mutated<F>(&mut self, f: F) -> &mut Self
    where F: (Fn(EntityMutatedEvent) -> Pin<Box<dyn Future<Output = ()> + Send>>) + Send + Sync + 'static {
        self.on_entity_mutated = Some(Arc::new(f));
        self
    }
}
