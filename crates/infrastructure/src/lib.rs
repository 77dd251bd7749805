//! Rootwalk Infrastructure Layer
//!
//! Network adapters behind the application ports: the hickory-proto wire
//! codec, the UDP transport, the failover/race query client, and the
//! static root hints table.

pub mod dns;
