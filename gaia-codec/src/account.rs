use bytes::{Buf, BufMut};
use prost::{
    encoding::{DecodeContext, WireType},
    DecodeError, Message,
};

use crate::{
    envelope::{self, Envelope, Registration, Variant},
    proto::cosmos_sdk::x::{
        auth::{
            v1::BaseAccount,
            vesting::v1::{ContinuousVestingAccount, DelayedVestingAccount, PeriodicVestingAccount},
        },
        supply::v1::ModuleAccount,
    },
    CodecError, ExportedAccount,
};

/// Account defines the application-level Account type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Account {
    /// One of the concrete account implementations, or nothing.
    pub sum: Option<AccountSum>,
}

/// All acceptable concrete [Account] implementations.
#[derive(Clone, Debug, PartialEq)]
pub enum AccountSum {
    BaseAccount(BaseAccount),
    ContinuousVestingAccount(ContinuousVestingAccount),
    DelayedVestingAccount(DelayedVestingAccount),
    PeriodicVestingAccount(PeriodicVestingAccount),
    ModuleAccount(ModuleAccount),
}

impl Variant for AccountSum {
    const REGISTRY: &'static [Registration<Self>] = &[
        Registration {
            field: 1,
            name: "base_account",
            decode: |buf| BaseAccount::decode(buf).map(AccountSum::BaseAccount),
        },
        Registration {
            field: 2,
            name: "continuous_vesting_account",
            decode: |buf| {
                ContinuousVestingAccount::decode(buf).map(AccountSum::ContinuousVestingAccount)
            },
        },
        Registration {
            field: 3,
            name: "delayed_vesting_account",
            decode: |buf| DelayedVestingAccount::decode(buf).map(AccountSum::DelayedVestingAccount),
        },
        Registration {
            field: 4,
            name: "periodic_vesting_account",
            decode: |buf| {
                PeriodicVestingAccount::decode(buf).map(AccountSum::PeriodicVestingAccount)
            },
        },
        Registration {
            field: 5,
            name: "module_account",
            decode: |buf| ModuleAccount::decode(buf).map(AccountSum::ModuleAccount),
        },
    ];

    fn field_number(&self) -> u32 {
        match self {
            AccountSum::BaseAccount(_) => 1,
            AccountSum::ContinuousVestingAccount(_) => 2,
            AccountSum::DelayedVestingAccount(_) => 3,
            AccountSum::PeriodicVestingAccount(_) => 4,
            AccountSum::ModuleAccount(_) => 5,
        }
    }

    fn payload_len(&self) -> usize {
        match self {
            AccountSum::BaseAccount(account) => account.encoded_len(),
            AccountSum::ContinuousVestingAccount(account) => account.encoded_len(),
            AccountSum::DelayedVestingAccount(account) => account.encoded_len(),
            AccountSum::PeriodicVestingAccount(account) => account.encoded_len(),
            AccountSum::ModuleAccount(account) => account.encoded_len(),
        }
    }

    fn encode_payload<B: BufMut>(&self, buf: &mut B) {
        match self {
            AccountSum::BaseAccount(account) => account.encode_raw(buf),
            AccountSum::ContinuousVestingAccount(account) => account.encode_raw(buf),
            AccountSum::DelayedVestingAccount(account) => account.encode_raw(buf),
            AccountSum::PeriodicVestingAccount(account) => account.encode_raw(buf),
            AccountSum::ModuleAccount(account) => account.encode_raw(buf),
        }
    }
}

impl Envelope for Account {
    const NAME: &'static str = "gaia.codec.v1.Account";
    type Sum = AccountSum;

    fn sum(&self) -> Option<&AccountSum> {
        self.sum.as_ref()
    }

    fn set_sum(&mut self, sum: Option<AccountSum>) {
        self.sum = sum;
    }

    fn take_sum(&mut self) -> Option<AccountSum> {
        self.sum.take()
    }
}

impl Account {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_account(&self) -> Option<&BaseAccount> {
        match &self.sum {
            Some(AccountSum::BaseAccount(account)) => Some(account),
            _ => None,
        }
    }

    pub fn continuous_vesting_account(&self) -> Option<&ContinuousVestingAccount> {
        match &self.sum {
            Some(AccountSum::ContinuousVestingAccount(account)) => Some(account),
            _ => None,
        }
    }

    pub fn delayed_vesting_account(&self) -> Option<&DelayedVestingAccount> {
        match &self.sum {
            Some(AccountSum::DelayedVestingAccount(account)) => Some(account),
            _ => None,
        }
    }

    pub fn periodic_vesting_account(&self) -> Option<&PeriodicVestingAccount> {
        match &self.sum {
            Some(AccountSum::PeriodicVestingAccount(account)) => Some(account),
            _ => None,
        }
    }

    pub fn module_account(&self) -> Option<&ModuleAccount> {
        match &self.sum {
            Some(AccountSum::ModuleAccount(account)) => Some(account),
            _ => None,
        }
    }

    /// The active payload, whichever kind it is.
    pub fn account(&self) -> Option<&dyn ExportedAccount> {
        let account: &dyn ExportedAccount = match self.sum.as_ref()? {
            AccountSum::BaseAccount(account) => account,
            AccountSum::ContinuousVestingAccount(account) => account,
            AccountSum::DelayedVestingAccount(account) => account,
            AccountSum::PeriodicVestingAccount(account) => account,
            AccountSum::ModuleAccount(account) => account,
        };
        Some(account)
    }

    /// Replace the payload. `None` clears it; a type that isn't registered
    /// is rejected and the current payload is left untouched.
    pub fn set_account(
        &mut self,
        value: Option<Box<dyn ExportedAccount>>,
    ) -> Result<(), CodecError> {
        let value = match value {
            Some(value) => value,
            None => {
                self.sum = None;
                return Ok(());
            }
        };
        let type_name = value.type_name();
        let sum = value
            .into_any()
            .downcast::<BaseAccount>()
            .map(|account| AccountSum::BaseAccount(*account))
            .or_else(|any| {
                any.downcast::<ContinuousVestingAccount>()
                    .map(|account| AccountSum::ContinuousVestingAccount(*account))
            })
            .or_else(|any| {
                any.downcast::<DelayedVestingAccount>()
                    .map(|account| AccountSum::DelayedVestingAccount(*account))
            })
            .or_else(|any| {
                any.downcast::<PeriodicVestingAccount>()
                    .map(|account| AccountSum::PeriodicVestingAccount(*account))
            })
            .or_else(|any| {
                any.downcast::<ModuleAccount>()
                    .map(|account| AccountSum::ModuleAccount(*account))
            })
            .map_err(|_| CodecError::UnsupportedPayloadType {
                envelope: Self::NAME,
                type_name,
            })?;
        self.sum = Some(sum);
        Ok(())
    }
}

impl From<AccountSum> for Account {
    fn from(sum: AccountSum) -> Self {
        Self { sum: Some(sum) }
    }
}

impl From<BaseAccount> for Account {
    fn from(account: BaseAccount) -> Self {
        AccountSum::BaseAccount(account).into()
    }
}

impl From<ContinuousVestingAccount> for Account {
    fn from(account: ContinuousVestingAccount) -> Self {
        AccountSum::ContinuousVestingAccount(account).into()
    }
}

impl From<DelayedVestingAccount> for Account {
    fn from(account: DelayedVestingAccount) -> Self {
        AccountSum::DelayedVestingAccount(account).into()
    }
}

impl From<PeriodicVestingAccount> for Account {
    fn from(account: PeriodicVestingAccount) -> Self {
        AccountSum::PeriodicVestingAccount(account).into()
    }
}

impl From<ModuleAccount> for Account {
    fn from(account: ModuleAccount) -> Self {
        AccountSum::ModuleAccount(account).into()
    }
}

impl Message for Account {
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

#[cfg(test)]
mod tests {
    use std::any::Any;

    use prost::encoding::{encode_key, encode_varint};
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::mocks::{every_account, random_account, random_base_account, random_module_account};

    fn account_number(n: u64) -> Account {
        BaseAccount {
            account_number: n,
            ..Default::default()
        }
        .into()
    }

    #[test]
    fn marshal_known_bytes() {
        // the payload encodes as [0x18, 0x01]
        let account = account_number(1);
        assert_eq!(account.marshal(), vec![0x0a, 0x02, 0x18, 0x01]);
        assert_eq!(account.size(), 4);
        assert_eq!(Account::unmarshal(&[0x0a, 0x02, 0x18, 0x01]).unwrap(), account);
    }

    #[test]
    fn tag_byte_per_variant() {
        let mut rng = StdRng::seed_from_u64(1);
        let tags: Vec<u8> = every_account(&mut rng)
            .iter()
            .map(|account| account.marshal()[0])
            .collect();
        assert_eq!(tags, vec![0x0a, 0x12, 0x1a, 0x22, 0x2a]);
    }

    #[test]
    fn round_trip_every_variant() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..20 {
            for account in every_account(&mut rng) {
                let bytes = account.marshal();
                assert_eq!(bytes.len(), account.size());
                assert_eq!(Account::unmarshal(&bytes).unwrap(), account);
            }
        }
    }

    #[test]
    fn empty_envelope() {
        let account = Account::new();
        assert_eq!(account.size(), 0);
        assert!(account.marshal().is_empty());
        assert_eq!(Account::unmarshal(&[]).unwrap(), Account::default());
    }

    #[test]
    fn default_payload_still_written() {
        let account = Account::from(BaseAccount::default());
        assert_eq!(account.marshal(), vec![0x0a, 0x00]);
        assert_eq!(Account::unmarshal(&[0x0a, 0x00]).unwrap(), account);
    }

    #[test]
    fn unknown_fields_skipped() {
        let known = account_number(3);
        let mut buf = Vec::new();
        encode_key(9, WireType::Varint, &mut buf);
        encode_varint(300, &mut buf);
        buf.extend(known.marshal());
        encode_key(10, WireType::LengthDelimited, &mut buf);
        encode_varint(2, &mut buf);
        buf.extend_from_slice(&[0xff, 0xff]);
        encode_key(11, WireType::ThirtyTwoBit, &mut buf);
        buf.extend_from_slice(&[1, 2, 3, 4]);

        assert_eq!(Account::unmarshal(&buf).unwrap(), known);
    }

    #[test]
    fn only_unknown_fields_is_empty() {
        let mut buf = Vec::new();
        encode_key(100, WireType::SixtyFourBit, &mut buf);
        buf.extend_from_slice(&[0; 8]);
        assert_eq!(Account::unmarshal(&buf).unwrap(), Account::default());
    }

    #[test]
    fn last_variant_wins() {
        let mut rng = StdRng::seed_from_u64(3);
        let first = Account::from(random_base_account(&mut rng));
        let second = Account::from(random_module_account(&mut rng));
        let mut buf = first.marshal();
        buf.extend(second.marshal());
        assert_eq!(Account::unmarshal(&buf).unwrap(), second);

        let mut buf = second.marshal();
        buf.extend(first.marshal());
        assert_eq!(Account::unmarshal(&buf).unwrap(), first);
    }

    #[test]
    fn same_variant_is_replaced_not_merged() {
        let first = Account::from(BaseAccount {
            address: vec![1; 20],
            ..Default::default()
        });
        let second = account_number(5);
        let mut buf = first.marshal();
        buf.extend(second.marshal());
        let decoded = Account::unmarshal(&buf).unwrap();
        assert_eq!(decoded, second);
        assert!(decoded.base_account().unwrap().address.is_empty());
    }

    #[test]
    fn truncated_payload() {
        let err = Account::unmarshal(&[0x0a, 0x05, 0x18, 0x01]).unwrap_err();
        assert!(matches!(err, CodecError::UnexpectedEndOfInput));
    }

    #[test]
    fn every_truncation_fails_cleanly() {
        let mut rng = StdRng::seed_from_u64(4);
        let bytes = random_account(&mut rng).marshal();
        for end in 1..bytes.len() {
            assert!(Account::unmarshal(&bytes[..end]).is_err(), "prefix {end}");
        }
    }

    #[test]
    fn truncated_key() {
        let err = Account::unmarshal(&[0x80]).unwrap_err();
        assert!(matches!(err, CodecError::UnexpectedEndOfInput));
    }

    #[test]
    fn negative_length() {
        let mut buf = vec![0x0a];
        encode_varint(u64::MAX, &mut buf);
        let err = Account::unmarshal(&buf).unwrap_err();
        assert!(matches!(err, CodecError::InvalidLength));
    }

    #[test]
    fn overflowing_key() {
        let err = Account::unmarshal(&[0xff; 11]).unwrap_err();
        assert!(matches!(err, CodecError::IntegerOverflow));
    }

    #[test]
    fn wrong_wire_type() {
        let err = Account::unmarshal(&[0x08, 0x01]).unwrap_err();
        assert!(matches!(
            err,
            CodecError::WrongWireType {
                field: "base_account",
                wire_type: 0
            }
        ));
    }

    #[test]
    fn wire_types_six_and_seven_name_the_field() {
        for (key, wire_type) in [(0x0e, 6), (0x0f, 7), (0x2e, 6)] {
            let err = Account::unmarshal(&[key]).unwrap_err();
            match err {
                CodecError::WrongWireType {
                    field,
                    wire_type: found,
                } => {
                    assert_eq!(found, wire_type);
                    assert!(field.ends_with("account"));
                }
                other => panic!("unexpected error {other:?}"),
            }
        }
        assert_eq!(
            Account::unmarshal(&[0x0e]).unwrap_err().to_string(),
            "wrong wire type 6 for field base_account"
        );
    }

    #[test]
    fn unknown_group_before_known_field() {
        // field 9 start group { field 1 varint 1 } field 9 end group, then
        // a base account
        let bytes = [0x4b, 0x08, 0x01, 0x4c, 0x0a, 0x02, 0x18, 0x01];
        assert_eq!(Account::unmarshal(&bytes).unwrap(), account_number(1));
    }

    #[test]
    fn unknown_nested_groups_skipped() -> anyhow::Result<()> {
        let known = account_number(2);
        let mut buf = Vec::new();
        encode_key(9, WireType::StartGroup, &mut buf);
        encode_key(10, WireType::StartGroup, &mut buf);
        encode_key(1, WireType::LengthDelimited, &mut buf);
        encode_varint(1, &mut buf);
        buf.push(0xff);
        encode_key(10, WireType::EndGroup, &mut buf);
        encode_key(9, WireType::EndGroup, &mut buf);
        buf.extend(known.marshal());
        assert_eq!(Account::unmarshal(&buf)?, known);
        Ok(())
    }

    #[test]
    fn end_group_for_non_group() {
        let err = Account::unmarshal(&[0x0c]).unwrap_err();
        assert!(matches!(
            err,
            CodecError::EndGroupForNonGroup("gaia.codec.v1.Account")
        ));
    }

    #[test]
    fn field_zero_is_illegal() {
        let err = Account::unmarshal(&[0x02, 0x00]).unwrap_err();
        assert!(matches!(err, CodecError::IllegalTag { tag: 2, .. }));
    }

    #[test]
    fn bad_payload() {
        // BaseAccount with a truncated account_number varint
        let err = Account::unmarshal(&[0x0a, 0x02, 0x18, 0x80]).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Payload {
                field: "base_account",
                ..
            }
        ));
    }

    #[test]
    fn typed_getters() {
        let mut rng = StdRng::seed_from_u64(5);
        let module = random_module_account(&mut rng);
        let account = Account::from(module.clone());
        assert_eq!(account.module_account(), Some(&module));
        assert!(account.base_account().is_none());
        assert!(account.continuous_vesting_account().is_none());
        assert!(account.delayed_vesting_account().is_none());
        assert!(account.periodic_vesting_account().is_none());
        assert!(Account::new().module_account().is_none());
    }

    #[test]
    fn exported_account() {
        let mut rng = StdRng::seed_from_u64(6);
        let module = random_module_account(&mut rng);
        let account = Account::from(module.clone());
        let exported = account.account().unwrap();
        assert_eq!(
            exported.address(),
            module.base_account.as_ref().unwrap().address.as_slice()
        );
        assert!(Account::new().account().is_none());
    }

    #[test]
    fn set_account_registered_types() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut account = Account::new();

        let base = random_base_account(&mut rng);
        account.set_account(Some(Box::new(base.clone()))).unwrap();
        assert_eq!(account.base_account(), Some(&base));

        let module = random_module_account(&mut rng);
        account.set_account(Some(Box::new(module.clone()))).unwrap();
        assert_eq!(account.module_account(), Some(&module));
        assert!(account.base_account().is_none());

        account.set_account(None).unwrap();
        assert_eq!(account, Account::default());
    }

    #[derive(Debug)]
    struct Custom;

    impl ExportedAccount for Custom {
        fn base_account(&self) -> Option<&BaseAccount> {
            None
        }

        fn into_any(self: Box<Self>) -> Box<dyn Any> {
            self
        }
    }

    #[test]
    fn set_account_unsupported_type() {
        let mut account = account_number(8);
        let err = account.set_account(Some(Box::new(Custom))).unwrap_err();
        match err {
            CodecError::UnsupportedPayloadType {
                envelope,
                type_name,
            } => {
                assert_eq!(envelope, "gaia.codec.v1.Account");
                assert!(type_name.ends_with("Custom"));
            }
            other => panic!("unexpected error {other:?}"),
        }
        // untouched
        assert_eq!(account, account_number(8));
    }

    #[test]
    fn marshal_to_front_of_buffer() {
        let account = account_number(1);
        let mut buf = [0xee; 6];
        assert_eq!(account.marshal_to(&mut buf).unwrap(), 4);
        assert_eq!(buf, [0x0a, 0x02, 0x18, 0x01, 0xee, 0xee]);
    }

    #[test]
    fn marshal_to_sized_buffer_writes_tail() {
        let account = account_number(1);
        let mut buf = [0xee; 6];
        assert_eq!(account.marshal_to_sized_buffer(&mut buf).unwrap(), 4);
        assert_eq!(buf, [0xee, 0xee, 0x0a, 0x02, 0x18, 0x01]);
    }

    #[test]
    fn marshal_to_small_buffer() {
        let account = account_number(1);
        let mut buf = [0; 3];
        let err = account.marshal_to(&mut buf).unwrap_err();
        assert!(matches!(
            err,
            CodecError::BufferTooSmall {
                required: 4,
                remaining: 3
            }
        ));
    }

    #[test]
    fn prost_message_agrees() {
        let mut rng = StdRng::seed_from_u64(9);
        for account in every_account(&mut rng) {
            let bytes = account.encode_to_vec();
            assert_eq!(bytes, account.marshal());
            assert_eq!(Message::encoded_len(&account), account.size());
            assert_eq!(<Account as Message>::decode(bytes.as_slice()).unwrap(), account);
        }
    }

    #[test]
    fn prost_decode_skips_unknown() {
        let known = account_number(3);
        let mut buf = Vec::new();
        encode_key(12, WireType::Varint, &mut buf);
        encode_varint(1, &mut buf);
        buf.extend(known.marshal());
        assert_eq!(<Account as Message>::decode(buf.as_slice()).unwrap(), known);
    }

    #[test]
    fn prost_decode_wrong_wire_type() {
        assert!(<Account as Message>::decode(&[0x08, 0x01][..]).is_err());
    }

    #[test]
    fn reset_clears() {
        let mut account = account_number(1);
        account.reset();
        assert_eq!(account, Account::default());
        let mut account = account_number(1);
        account.clear();
        assert_eq!(account.take_sum(), None);
    }
}
