use metrics::counter;

/// Contract reads issued against the helper, labelled by function name.
pub const RPC_CALLS_TOTAL: &str = "truemarket_rpc_calls_total";

/// Market details reshaped into SDK events.
pub const EVENTS_CONVERTED_TOTAL: &str = "truemarket_events_converted_total";

pub fn record_rpc_call(function: &'static str) {
    counter!(RPC_CALLS_TOTAL, "function" => function).increment(1);
}

pub fn record_events_converted(count: usize) {
    counter!(EVENTS_CONVERTED_TOTAL).increment(count as u64);
}
