//! Packet codec
//!
//! Canonical encoding of a cross-chain packet, its content hash, and the
//! reconstruction of a packet from an endpoint delivery notification.
//!
//! # Byte Layout (76-byte header + payload)
//! - Bytes 0-1:    src_chain_id (u16, big-endian)
//! - Bytes 2-33:   src_address (32 bytes, left-padded)
//! - Bytes 34-35:  dst_chain_id (u16, big-endian)
//! - Bytes 36-67:  dst_address (32 bytes, left-padded)
//! - Bytes 68-75:  nonce (u64, big-endian)
//! - Bytes 76-:    payload (remaining bytes, unprefixed)
//!
//! Both ends of a channel must produce this layout byte for byte; the hash is
//! keccak256 over it and is what receivers key their replay guard on.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;

use crate::address::{WireAddress, WIRE_ADDRESS_LEN};
use crate::error::CodecError;
use crate::hash::keccak256;

/// Size of the fixed part of an encoded packet
pub const PACKET_HEADER_LEN: usize = 2 + WIRE_ADDRESS_LEN + 2 + WIRE_ADDRESS_LEN + 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Packet {
    pub src_chain_id: u16,
    pub src_address: WireAddress,
    pub dst_chain_id: u16,
    pub dst_address: WireAddress,
    pub nonce: u64,
    pub payload: Vec<u8>,
}

/// Delivery notification as handed over by the messaging endpoint.
///
/// Endpoints report the same logical message in different shapes; each shape
/// is an explicit variant and maps onto [`Packet`] through [`rebuild`].
#[cw_serde]
pub enum DeliveryEvent {
    /// Fields in the byte form used at send time (addresses 1..=32 bytes).
    Packet {
        src_chain_id: u16,
        src_address: Binary,
        dst_chain_id: u16,
        dst_address: Binary,
        nonce: u64,
        payload: Binary,
    },
    /// Relayer notification reporting addresses as hex text, possibly
    /// unpadded (`0x7f38...` for a 20-byte sender).
    Raw {
        src_chain_id: u16,
        src_address_raw: String,
        dst_chain_id: u16,
        dst_address_raw: String,
        nonce: u64,
        payload: Binary,
    },
    /// A complete canonical encoding.
    Encoded { data: Binary },
}

impl Packet {
    /// Build a packet from raw address bytes, normalising both addresses.
    pub fn new(
        src_chain_id: u16,
        src_address: &[u8],
        dst_chain_id: u16,
        dst_address: &[u8],
        nonce: u64,
        payload: impl Into<Vec<u8>>,
    ) -> Result<Self, CodecError> {
        Ok(Self {
            src_chain_id,
            src_address: WireAddress::from_slice(src_address)?,
            dst_chain_id,
            dst_address: WireAddress::from_slice(dst_address)?,
            nonce,
            payload: payload.into(),
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        encode(self)
    }

    pub fn hash(&self) -> [u8; 32] {
        hash(self)
    }
}

/// Canonical encoding, see the module docs for the layout.
pub fn encode(packet: &Packet) -> Vec<u8> {
    let mut data = Vec::with_capacity(PACKET_HEADER_LEN + packet.payload.len());

    data.extend_from_slice(&packet.src_chain_id.to_be_bytes());
    data.extend_from_slice(packet.src_address.as_slice());
    data.extend_from_slice(&packet.dst_chain_id.to_be_bytes());
    data.extend_from_slice(packet.dst_address.as_slice());
    data.extend_from_slice(&packet.nonce.to_be_bytes());
    data.extend_from_slice(&packet.payload);

    data
}

/// keccak256 of the canonical encoding
pub fn hash(packet: &Packet) -> [u8; 32] {
    keccak256(&encode(packet))
}

/// Inverse of [`encode`]. Everything after the header is payload.
pub fn decode(data: &[u8]) -> Result<Packet, CodecError> {
    if data.len() < PACKET_HEADER_LEN {
        return Err(CodecError::event_shape(format!(
            "encoded packet needs at least {} bytes, got {}",
            PACKET_HEADER_LEN,
            data.len()
        )));
    }

    let (src_chain, rest) = data.split_at(2);
    let (src_address, rest) = rest.split_at(WIRE_ADDRESS_LEN);
    let (dst_chain, rest) = rest.split_at(2);
    let (dst_address, rest) = rest.split_at(WIRE_ADDRESS_LEN);
    let (nonce, payload) = rest.split_at(8);

    let mut nonce_bytes = [0u8; 8];
    nonce_bytes.copy_from_slice(nonce);

    Ok(Packet {
        src_chain_id: u16::from_be_bytes([src_chain[0], src_chain[1]]),
        src_address: WireAddress::from_slice(src_address)?,
        dst_chain_id: u16::from_be_bytes([dst_chain[0], dst_chain[1]]),
        dst_address: WireAddress::from_slice(dst_address)?,
        nonce: u64::from_be_bytes(nonce_bytes),
        payload: payload.to_vec(),
    })
}

/// Reconstruct the packet a delivery notification describes.
///
/// Applies the same address normalisation as [`Packet::new`], so the hash of
/// a rebuilt packet equals the hash computed at send time.
pub fn rebuild(event: &DeliveryEvent) -> Result<Packet, CodecError> {
    match event {
        DeliveryEvent::Packet {
            src_chain_id,
            src_address,
            dst_chain_id,
            dst_address,
            nonce,
            payload,
        } => {
            require_present("src_address", src_address.is_empty())?;
            require_present("dst_address", dst_address.is_empty())?;
            Packet::new(
                *src_chain_id,
                src_address.as_slice(),
                *dst_chain_id,
                dst_address.as_slice(),
                *nonce,
                payload.to_vec(),
            )
        }
        DeliveryEvent::Raw {
            src_chain_id,
            src_address_raw,
            dst_chain_id,
            dst_address_raw,
            nonce,
            payload,
        } => {
            require_present("src_address_raw", src_address_raw.trim().is_empty())?;
            require_present("dst_address_raw", dst_address_raw.trim().is_empty())?;
            Ok(Packet {
                src_chain_id: *src_chain_id,
                src_address: WireAddress::from_hex(src_address_raw)?,
                dst_chain_id: *dst_chain_id,
                dst_address: WireAddress::from_hex(dst_address_raw)?,
                nonce: *nonce,
                payload: payload.to_vec(),
            })
        }
        DeliveryEvent::Encoded { data } => decode(data.as_slice()),
    }
}

fn require_present(field: &str, missing: bool) -> Result<(), CodecError> {
    if missing {
        return Err(CodecError::event_shape(format!("missing {}", field)));
    }
    Ok(())
}
