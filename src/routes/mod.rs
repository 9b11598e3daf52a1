//! The routes served by this crate.

pub use sample::{
    EchoResult,
    SampleQuery,
    DEFAULT_PARAM,
};

crate::route_table! {
    router {
        sample, get;
    }
}
