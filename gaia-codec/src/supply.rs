use bytes::{Buf, BufMut};
use prost::{
    encoding::{DecodeContext, WireType},
    DecodeError, Message,
};

use crate::{
    envelope::{self, Envelope, Registration, Variant},
    proto::cosmos_sdk::x::supply::v1::Supply as SupplyRecord,
    CodecError, ExportedSupply,
};

/// Supply defines the application-level Supply type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Supply {
    /// One of the concrete supply implementations, or nothing.
    pub sum: Option<SupplySum>,
}

/// All acceptable concrete [Supply] implementations.
#[derive(Clone, Debug, PartialEq)]
pub enum SupplySum {
    Supply(SupplyRecord),
}

impl Variant for SupplySum {
    const REGISTRY: &'static [Registration<Self>] = &[Registration {
        field: 1,
        name: "supply",
        decode: |buf| SupplyRecord::decode(buf).map(SupplySum::Supply),
    }];

    fn field_number(&self) -> u32 {
        match self {
            SupplySum::Supply(_) => 1,
        }
    }

    fn payload_len(&self) -> usize {
        match self {
            SupplySum::Supply(supply) => supply.encoded_len(),
        }
    }

    fn encode_payload<B: BufMut>(&self, buf: &mut B) {
        match self {
            SupplySum::Supply(supply) => supply.encode_raw(buf),
        }
    }
}

impl Envelope for Supply {
    const NAME: &'static str = "gaia.codec.v1.Supply";
    type Sum = SupplySum;

    fn sum(&self) -> Option<&SupplySum> {
        self.sum.as_ref()
    }

    fn set_sum(&mut self, sum: Option<SupplySum>) {
        self.sum = sum;
    }

    fn take_sum(&mut self) -> Option<SupplySum> {
        self.sum.take()
    }
}

impl Supply {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn supply(&self) -> Option<&SupplyRecord> {
        match &self.sum {
            Some(SupplySum::Supply(supply)) => Some(supply),
            None => None,
        }
    }

    /// The active payload through its common capability.
    pub fn exported_supply(&self) -> Option<&dyn ExportedSupply> {
        let supply: &dyn ExportedSupply = match self.sum.as_ref()? {
            SupplySum::Supply(supply) => supply,
        };
        Some(supply)
    }

    /// Replace the payload. `None` clears it; a type that isn't registered
    /// is rejected and the current payload is left untouched.
    pub fn set_exported_supply(
        &mut self,
        value: Option<Box<dyn ExportedSupply>>,
    ) -> Result<(), CodecError> {
        let value = match value {
            Some(value) => value,
            None => {
                self.sum = None;
                return Ok(());
            }
        };
        let type_name = value.type_name();
        let supply = value.into_any().downcast::<SupplyRecord>().map_err(|_| {
            CodecError::UnsupportedPayloadType {
                envelope: Self::NAME,
                type_name,
            }
        })?;
        self.sum = Some(SupplySum::Supply(*supply));
        Ok(())
    }
}

impl From<SupplyRecord> for Supply {
    fn from(supply: SupplyRecord) -> Self {
        Self {
            sum: Some(SupplySum::Supply(supply)),
        }
    }
}

impl Message for Supply {
    fn encode_raw<B>(&self, buf: &mut B)
    where
        B: BufMut,
        Self: Sized,
    {
        self.encode_to(buf)
    }

    fn merge_field<B>(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut B,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError>
    where
        B: Buf,
        Self: Sized,
    {
        envelope::merge_field(self, tag, wire_type, buf, ctx)
    }

    fn encoded_len(&self) -> usize {
        self.size()
    }

    fn clear(&mut self) {
        self.reset()
    }
}
