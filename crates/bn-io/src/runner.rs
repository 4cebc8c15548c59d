//! Batch processing: build the network from base requests, answer stat
//! requests, write the responses.

use std::io::{BufRead, Write};

use bn_core::NetworkConfig;
use bn_network::{TransitNetwork, TransitNetworkBuilder};

use crate::{BaseRequest, IoResult, StatRequest, StatResponse, read_document};

/// Apply `requests` to a fresh builder and connect the network.
pub fn build_network(requests: &[BaseRequest], config: NetworkConfig) -> IoResult<TransitNetwork> {
    let mut builder = TransitNetworkBuilder::with_config(config)?;

    for request in requests {
        match request {
            BaseRequest::Stop { name, lat_deg, lon_deg, distances } => {
                builder.register_stop(name, *lat_deg, *lon_deg);
                for (to, meters) in distances {
                    builder.declare_distance(name, to, *meters)?;
                }
            }
            BaseRequest::Bus { number, stops, cycled } => {
                builder.register_bus(*number, stops, *cycled);
            }
        }
    }

    Ok(builder.connect_network()?)
}

/// Answer every request in order.
///
/// # Errors
///
/// The first metrics failure (e.g. a missing declared distance) aborts the
/// batch.
pub fn answer(network: &mut TransitNetwork, requests: &[StatRequest]) -> IoResult<Vec<StatResponse>> {
    requests
        .iter()
        .map(|request| -> IoResult<StatResponse> {
            Ok(match request {
                StatRequest::Bus(number) => StatResponse::Bus {
                    number:  *number,
                    metrics: network.bus_metrics(*number)?,
                },
                StatRequest::Stop(name) => StatResponse::Stop {
                    name:  name.clone(),
                    buses: network
                        .stop_buses(name)
                        .map(|set| set.iter().copied().collect()),
                },
            })
        })
        .collect()
}

/// Read a request document from `input` and write one response line per
/// stat request to `output`.
pub fn process<R: BufRead, W: Write>(input: R, mut output: W, config: NetworkConfig) -> IoResult<()> {
    let document = read_document(input)?;
    let mut network = build_network(&document.base, config)?;
    for response in answer(&mut network, &document.stat)? {
        writeln!(output, "{response}")?;
    }
    output.flush()?;
    Ok(())
}
