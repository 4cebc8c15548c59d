//! Parsed request types.

use bn_core::BusId;

/// A network-building request.
#[derive(Clone, Debug, PartialEq)]
pub enum BaseRequest {
    /// `Stop <name>: <lat>, <lon>[, <D>m to <other>]*`
    Stop {
        name:      String,
        lat_deg:   f64,
        lon_deg:   f64,
        /// Declared road distances from this stop, in metres.
        distances: Vec<(String, u64)>,
    },
    /// `Bus <number>: A - B - C` or `Bus <number>: A > B > A`
    Bus {
        number: BusId,
        stops:  Vec<String>,
        cycled: bool,
    },
}

/// A query against the connected network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatRequest {
    Bus(BusId),
    Stop(String),
}

/// A whole input: base requests followed by stat requests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestDocument {
    pub base: Vec<BaseRequest>,
    pub stat: Vec<StatRequest>,
}
