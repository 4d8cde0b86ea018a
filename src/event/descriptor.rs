//! Event descriptor: the translation rule for one module event kind.

use ethers::abi::{Event, EventParam, Token};
use ethers::types::{Address, H256};

use crate::abi::{check_token, split_arguments};
use crate::error::{Result, TranslationError};
use crate::event::attributes::search_attributes;
use crate::event::data::pack_values;
use crate::event::decoder::{decode_attribute, DecoderTable};
use crate::event::topics::build_topics;
use crate::types::SourceEvent;

/// Everything needed to turn one kind of module event into an Ethereum log.
///
/// Built once from a parsed ABI event and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct EventDescriptor {
    /// Address standing in for the module that emits the event.
    owner: Address,
    /// ABI event name, kept for diagnostics.
    name: String,
    /// Event id, always the first topic.
    id: H256,
    /// Arguments emitted as topics 1..=3, in declaration order.
    indexed: Vec<EventParam>,
    /// Arguments packed into the log data, in declaration order.
    non_indexed: Vec<EventParam>,
    /// Per-event decoders, consulted before the default table.
    overrides: DecoderTable,
}

impl EventDescriptor {
    /// Build a descriptor from a parsed ABI event.
    ///
    /// Rejects anonymous events and events with more than three indexed arguments.
    pub fn new(owner: Address, event: &Event, overrides: DecoderTable) -> Result<Self> {
        let (indexed, non_indexed) = split_arguments(event)?;
        Ok(Self {
            owner,
            name: event.name.clone(),
            id: event.signature(),
            indexed,
            non_indexed,
            overrides,
        })
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> H256 {
        self.id
    }

    pub fn indexed_arguments(&self) -> &[EventParam] {
        &self.indexed
    }

    pub fn non_indexed_arguments(&self) -> &[EventParam] {
        &self.non_indexed
    }

    pub fn overrides(&self) -> &DecoderTable {
        &self.overrides
    }

    /// Number of attributes a source event must carry at minimum.
    pub fn required_attributes(&self) -> usize {
        self.indexed.len() + self.non_indexed.len()
    }

    /// Cheap pre-flight check on the attribute count.
    ///
    /// Passing does not guarantee every argument has a matching key.
    pub fn validate_attributes(&self, event: &SourceEvent) -> Result<()> {
        let required = self.required_attributes();
        let provided = event.num_attributes();
        if provided < required {
            return Err(TranslationError::InsufficientAttributes {
                event_type: event.event_type.clone(),
                required,
                provided,
            });
        }
        Ok(())
    }

    /// Build the log topics: the event id followed by one topic per indexed argument.
    pub fn make_topics(&self, event: &SourceEvent, defaults: &DecoderTable) -> Result<Vec<H256>> {
        let mut values = Vec::with_capacity(self.indexed.len());
        for arg in &self.indexed {
            let value = self.decode_argument(event, arg, defaults)?;
            check_token(&arg.kind, &value)?;
            values.push(value);
        }
        build_topics(self.id, &values)
    }

    /// Build the log data: the ABI encoding of all non-indexed arguments.
    pub fn make_data(&self, event: &SourceEvent, defaults: &DecoderTable) -> Result<Vec<u8>> {
        let values = self
            .non_indexed
            .iter()
            .map(|arg| self.decode_argument(event, arg, defaults))
            .collect::<Result<Vec<Token>>>()?;
        pack_values(&self.non_indexed, &values)
    }

    fn decode_argument(
        &self,
        event: &SourceEvent,
        arg: &EventParam,
        defaults: &DecoderTable,
    ) -> Result<Token> {
        let idx = search_attributes(&event.attributes, &arg.name).ok_or_else(|| {
            TranslationError::MissingAttribute {
                event_type: event.event_type.clone(),
                argument: arg.name.clone(),
            }
        })?;
        let attr = &event.attributes[idx];
        decode_attribute(&self.overrides, defaults, &attr.key, &attr.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::parse_event_signature;
    use crate::error::DecodeFailure;
    use crate::event::decoder::DecodeResult;
    use ethers::types::U256;

    fn uint(v: &str) -> DecodeResult {
        U256::from_dec_str(v)
            .map(Token::Uint)
            .map_err(|e| DecodeFailure::new(e.to_string()))
    }

    fn descriptor(signature: &str) -> EventDescriptor {
        let event = parse_event_signature(signature).unwrap();
        EventDescriptor::new(Address::repeat_byte(0x01), &event, DecoderTable::new()).unwrap()
    }

    #[test]
    fn test_construction_splits_arguments() {
        let desc = descriptor("event Redelegate(address indexed src, address indexed dst, uint256 amount, uint256 height)");

        assert_eq!(desc.name(), "Redelegate");
        assert_eq!(desc.indexed_arguments().len(), 2);
        assert_eq!(desc.non_indexed_arguments().len(), 2);
        assert_eq!(desc.required_attributes(), 4);
        assert_eq!(desc.owner(), Address::repeat_byte(0x01));
        assert!(desc.overrides().is_empty());
    }

    #[test]
    fn test_id_is_event_signature_hash() {
        let desc = descriptor("event Transfer(address indexed from, address indexed to, uint256 value)");
        assert_eq!(
            hex::encode(desc.id()),
            "ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
        );
    }

    #[test]
    fn test_validate_attributes() {
        let desc = descriptor("event Mint(uint256 indexed a, uint256 b)");

        let short = SourceEvent::new("mint").with_attribute("a", "1");
        assert_eq!(
            desc.validate_attributes(&short),
            Err(TranslationError::InsufficientAttributes {
                event_type: "mint".into(),
                required: 2,
                provided: 1,
            })
        );

        // Only the count is checked.
        let wrong_keys = short.clone().with_attribute("c", "2");
        assert!(desc.validate_attributes(&wrong_keys).is_ok());
    }

    #[test]
    fn test_make_topics_and_data() {
        let desc = descriptor("event Mint(uint256 indexed a, uint256 b)");
        let defaults = DecoderTable::new().with("a", uint).with("b", uint);
        let event = SourceEvent::new("mint").with_attribute("b", "9").with_attribute("a", "3");

        let topics = desc.make_topics(&event, &defaults).unwrap();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0], desc.id());
        assert_eq!(topics[1].to_low_u64_be(), 3);

        let data = desc.make_data(&event, &defaults).unwrap();
        assert_eq!(data.len(), 32);
        assert_eq!(data[31], 9);
    }

    #[test]
    fn test_indexed_type_mismatch() {
        let desc = descriptor("event Flag(bool indexed on)");
        let defaults = DecoderTable::new().with("on", uint);
        let event = SourceEvent::new("flag").with_attribute("on", "1");

        assert!(matches!(
            desc.make_topics(&event, &defaults),
            Err(TranslationError::Encoding(_))
        ));
    }
}
