//! Event registry: pairs module event types with their descriptors.
//!
//! This is the log-emission side of the crate. The descriptors themselves
//! never log; the registry reports what it registered, translated, or skipped.

use std::collections::HashMap;
use std::sync::Arc;

use ethers::abi::Event;
use ethers::types::Address;
use tracing::{debug, warn};

use crate::config::RegistryConfig;
use crate::decoders::cosmos_defaults;
use crate::error::{Result, TranslationError};
use crate::event::decoder::DecoderTable;
use crate::event::descriptor::EventDescriptor;
use crate::types::{Log, SourceEvent};

/// Maps module event types to descriptors and translates events into logs.
#[derive(Clone, Debug)]
pub struct EventRegistry {
    /// Shared, read-only default decoders.
    defaults: Arc<DecoderTable>,
    descriptors: HashMap<String, EventDescriptor>,
}

impl EventRegistry {
    /// Create an empty registry backed by `defaults`.
    pub fn new(defaults: Arc<DecoderTable>) -> Self {
        Self {
            defaults,
            descriptors: HashMap::new(),
        }
    }

    /// Create an empty registry backed by the standard module decoders.
    pub fn with_cosmos_defaults() -> Self {
        Self::new(Arc::new(cosmos_defaults()))
    }

    /// Build a registry from configuration, one descriptor per binding.
    pub fn from_config(config: &RegistryConfig, defaults: Arc<DecoderTable>) -> Result<Self> {
        let mut registry = Self::new(defaults);
        for binding in &config.bindings {
            let event = binding.signature.to_event()?;
            registry.register(binding.event_type.clone(), binding.owner, &event)?;
        }
        Ok(registry)
    }

    /// Register `event_type` with no decoder overrides.
    pub fn register(
        &mut self,
        event_type: impl Into<String>,
        owner: Address,
        event: &Event,
    ) -> Result<()> {
        self.register_with_overrides(event_type, owner, event, DecoderTable::new())
    }

    /// Register `event_type` with per-event decoder overrides.
    ///
    /// A later registration for the same type replaces the earlier one.
    pub fn register_with_overrides(
        &mut self,
        event_type: impl Into<String>,
        owner: Address,
        event: &Event,
        overrides: DecoderTable,
    ) -> Result<()> {
        let event_type = event_type.into();
        let descriptor = EventDescriptor::new(owner, event, overrides)?;
        debug!(
            %event_type,
            abi_event = %descriptor.name(),
            indexed = descriptor.indexed_arguments().len(),
            non_indexed = descriptor.non_indexed_arguments().len(),
            "registered event descriptor"
        );
        self.descriptors.insert(event_type, descriptor);
        Ok(())
    }

    /// Descriptor registered for `event_type`, if any.
    pub fn descriptor(&self, event_type: &str) -> Option<&EventDescriptor> {
        self.descriptors.get(event_type)
    }

    pub fn defaults(&self) -> &DecoderTable {
        &self.defaults
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Translate one module event into a log.
    ///
    /// Either the whole log is produced or an error is returned.
    pub fn translate(&self, event: &SourceEvent) -> Result<Log> {
        let descriptor = self
            .descriptor(&event.event_type)
            .ok_or_else(|| TranslationError::UnknownEventType(event.event_type.clone()))?;

        descriptor.validate_attributes(event)?;
        let topics = descriptor.make_topics(event, &self.defaults)?;
        let data = descriptor.make_data(event, &self.defaults)?;

        debug!(
            event_type = %event.event_type,
            topics = topics.len(),
            data_len = data.len(),
            "translated event"
        );
        Ok(Log {
            address: descriptor.owner(),
            topics,
            data,
        })
    }

    /// Translate a batch of events, skipping those that cannot be translated.
    ///
    /// Unregistered event types are logged at debug, failures at warn.
    pub fn translate_all(&self, events: &[SourceEvent]) -> Vec<Log> {
        events
            .iter()
            .filter_map(|event| match self.translate(event) {
                Ok(log) => Some(log),
                Err(TranslationError::UnknownEventType(_)) => {
                    debug!(event_type = %event.event_type, "skipping unregistered event type");
                    None
                }
                Err(e) => {
                    warn!(event_type = %event.event_type, error = %e, "dropping untranslatable event");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::parse_event_signature;

    fn registry() -> EventRegistry {
        let mut registry = EventRegistry::with_cosmos_defaults();
        let event = parse_event_signature("event Burn(address indexed burner, uint256 amount)").unwrap();
        registry
            .register("burn", Address::from_low_u64_be(0x69), &event)
            .unwrap();
        registry
    }

    #[test]
    fn test_translate_registered_event() {
        let registry = registry();
        let event = SourceEvent::new("burn")
            .with_attribute("amount", "25stake")
            .with_attribute("burner", "0x00000000000000000000000000000000000000bb");

        let log = registry.translate(&event).unwrap();
        assert_eq!(log.address, Address::from_low_u64_be(0x69));
        assert_eq!(log.topics.len(), 2);
        assert_eq!(log.topics[1].to_low_u64_be(), 0xbb);
        assert_eq!(log.data[31], 25);
    }

    #[test]
    fn test_unknown_event_type() {
        let result = registry().translate(&SourceEvent::new("mint"));
        assert_eq!(result, Err(TranslationError::UnknownEventType("mint".into())));
    }

    #[test]
    fn test_insufficient_attributes_checked_first() {
        let event = SourceEvent::new("burn").with_attribute("amount", "1");
        assert!(matches!(
            registry().translate(&event),
            Err(TranslationError::InsufficientAttributes { required: 2, provided: 1, .. })
        ));
    }

    #[test]
    fn test_reregistration_replaces() {
        let mut registry = registry();
        let event = parse_event_signature("event Burn(uint256 amount)").unwrap();
        registry.register("burn", Address::zero(), &event).unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.descriptor("burn").unwrap().indexed_arguments().is_empty());
    }

    #[test]
    fn test_translate_all_skips_failures() {
        let registry = registry();
        let events = vec![
            SourceEvent::new("burn")
                .with_attribute("burner", "0x00000000000000000000000000000000000000bb")
                .with_attribute("amount", "1"),
            SourceEvent::new("burn")
                .with_attribute("burner", "not-an-address")
                .with_attribute("amount", "2"),
            SourceEvent::new("unregistered"),
        ];

        let logs = registry.translate_all(&events);
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].data[31], 1);
    }
}
