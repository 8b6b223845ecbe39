//! Payload messages carried by the envelopes. The envelopes treat these as
//! opaque: all they rely on is the [prost::Message] implementation.

pub mod cosmos_sdk {
    pub mod v1 {
        include!("./generated/cosmos_sdk.v1.rs");
    }

    pub mod x {
        pub mod auth {
            pub mod v1 {
                include!("./generated/cosmos_sdk.x.auth.v1.rs");
            }

            pub mod vesting {
                pub mod v1 {
                    include!("./generated/cosmos_sdk.x.auth.vesting.v1.rs");
                }
            }
        }

        pub mod supply {
            pub mod v1 {
                include!("./generated/cosmos_sdk.x.supply.v1.rs");
            }
        }
    }
}
