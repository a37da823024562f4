use std::collections::HashMap;

use log::{debug, info};

use crate::{
    attributes::{AttributeCodec, AttributeCodecs},
    connection::{connection_config::ConnectionConfig, decoder::Decoder, encoder::Encoder},
    items::{Item, ItemRegistry},
    messages::{
        converters::register_default_converters, CodecError, ConvertContext, ConverterRegistry,
        MessageConverter, NetworkMessage, RegistrationError,
    },
};

pub mod error;
pub use error::ProtocolError;

// Protocol Plugin
pub trait ProtocolPlugin {
    fn build(&self, protocol: &mut Protocol);
}

/// The registry value shared by every component that encodes or decodes
/// messages. Built once at startup, locked, then shared (typically behind an
/// `Arc`) between network and game-loop threads.
pub struct Protocol {
    pub converters: ConverterRegistry,
    pub attribute_codecs: AttributeCodecs,
    pub items: ItemRegistry,
    /// Envelope limits applied by `encode` and `decode`
    pub connection: ConnectionConfig,
    locked: bool,
}

impl Default for Protocol {
    fn default() -> Self {
        let mut protocol = Self::empty();
        protocol.add_default_converters();
        protocol
    }
}

fn fail(error: RegistrationError) -> ! {
    panic!("Protocol registration failed: {}", error);
}

impl Protocol {
    /// A protocol with every built-in converter registered.
    pub fn builder() -> Self {
        Self::default()
    }

    /// A protocol with no converters, codecs or items.
    pub fn empty() -> Self {
        Self {
            converters: ConverterRegistry::new(),
            attribute_codecs: AttributeCodecs::new(),
            items: ItemRegistry::new(),
            connection: ConnectionConfig::default(),
            locked: false,
        }
    }

    pub fn add_plugin<P: ProtocolPlugin>(&mut self, plugin: P) -> &mut Self {
        self.check_lock();
        plugin.build(self);
        self
    }

    pub fn connection_config(&mut self, config: ConnectionConfig) -> &mut Self {
        self.check_lock();
        self.connection = config;
        self
    }

    pub fn add_default_converters(&mut self) -> &mut Self {
        self.check_lock();
        if let Err(error) = register_default_converters(&mut self.converters) {
            fail(error);
        }
        self
    }

    pub fn add_converter<C: MessageConverter>(&mut self, converter: C) -> &mut Self {
        self.check_lock();
        if let Err(error) = self.converters.register(converter) {
            fail(error);
        }
        self
    }

    pub fn add_attribute_codec<C: AttributeCodec>(&mut self, codec: C) -> &mut Self {
        self.check_lock();
        if let Err(error) = self.attribute_codecs.register(codec) {
            fail(error);
        }
        self
    }

    pub fn add_item<T: Item + Default>(&mut self, item_type: &str) -> &mut Self {
        self.check_lock();
        if let Err(error) = self.items.register::<T>(item_type) {
            fail(error);
        }
        self
    }

    pub fn add_item_with_data<T, F>(&mut self, item_type: &str, factory: F) -> &mut Self
    where
        T: Item + Default,
        F: Fn(&HashMap<String, String>) -> Result<T, String> + Send + Sync + 'static,
    {
        self.check_lock();
        if let Err(error) = self.items.register_with_data::<T, F>(item_type, factory) {
            fail(error);
        }
        self
    }

    // Non-panicking builder methods

    pub fn try_add_plugin<P: ProtocolPlugin>(&mut self, plugin: P) -> Result<&mut Self, ProtocolError> {
        self.try_check_lock()?;
        plugin.build(self);
        Ok(self)
    }

    pub fn try_connection_config(&mut self, config: ConnectionConfig) -> Result<&mut Self, ProtocolError> {
        self.try_check_lock()?;
        self.connection = config;
        Ok(self)
    }

    pub fn try_add_default_converters(&mut self) -> Result<&mut Self, ProtocolError> {
        self.try_check_lock()?;
        register_default_converters(&mut self.converters)?;
        Ok(self)
    }

    pub fn try_add_converter<C: MessageConverter>(&mut self, converter: C) -> Result<&mut Self, ProtocolError> {
        self.try_check_lock()?;
        self.converters.register(converter)?;
        Ok(self)
    }

    pub fn try_add_attribute_codec<C: AttributeCodec>(&mut self, codec: C) -> Result<&mut Self, ProtocolError> {
        self.try_check_lock()?;
        self.attribute_codecs.register(codec)?;
        Ok(self)
    }

    pub fn try_add_item<T: Item + Default>(&mut self, item_type: &str) -> Result<&mut Self, ProtocolError> {
        self.try_check_lock()?;
        self.items.register::<T>(item_type)?;
        Ok(self)
    }

    pub fn try_add_item_with_data<T, F>(
        &mut self,
        item_type: &str,
        factory: F,
    ) -> Result<&mut Self, ProtocolError>
    where
        T: Item + Default,
        F: Fn(&HashMap<String, String>) -> Result<T, String> + Send + Sync + 'static,
    {
        self.try_check_lock()?;
        self.items.register_with_data::<T, F>(item_type, factory)?;
        Ok(self)
    }

    pub fn try_lock(&mut self) -> Result<(), ProtocolError> {
        self.try_check_lock()?;
        self.lock_inner();
        Ok(())
    }

    pub fn lock(&mut self) {
        self.check_lock();
        self.lock_inner();
    }

    fn lock_inner(&mut self) {
        self.locked = true;
        info!(
            "Protocol locked with {} converters, {} items",
            self.converters.len(),
            self.items.len()
        );
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Checks if protocol is locked without panicking
    /// Returns Err if protocol is locked
    pub fn try_check_lock(&self) -> Result<(), ProtocolError> {
        if self.locked {
            Err(ProtocolError::AlreadyLocked)
        } else {
            Ok(())
        }
    }

    /// Checks if protocol is locked, panics if it is
    pub fn check_lock(&self) {
        if self.locked {
            panic!("Protocol already locked!");
        }
    }

    pub fn build(&mut self) -> Self {
        std::mem::replace(self, Self::empty())
    }

    pub fn context(&self) -> ConvertContext<'_> {
        ConvertContext::new(&self.items, &self.attribute_codecs)
            .with_max_inventory_slots(self.connection.max_inventory_slots)
    }

    /// Convert a domain message and wrap it in an envelope.
    pub fn encode(&self, message: &dyn NetworkMessage) -> Result<Vec<u8>, CodecError> {
        let context = self.context();
        let wire = self.converters.to_wire(message, &context)?;
        let id = self.converters.type_id_for(&*wire)?;
        let envelope = Encoder::new(&self.connection).encode(id, &wire.encode_payload())?;
        debug!("Encoded {} as wire type id {} ({} bytes)", message.kind(), id, envelope.len());
        Ok(envelope)
    }

    /// Parse an envelope and convert it back into a domain message.
    pub fn decode(&self, envelope: &[u8]) -> Result<Box<dyn NetworkMessage>, CodecError> {
        let (id, payload) = Decoder::new(&self.connection).decode(envelope)?;
        let wire = self.converters.parse(id, payload)?;
        let message = self.converters.from_wire(&*wire, &self.context())?;
        debug!("Decoded wire type id {} into {}", id, message.kind());
        Ok(message)
    }
}
