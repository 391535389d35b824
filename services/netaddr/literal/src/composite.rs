//! Endpoint (`address:port`) and route (`address/prefix`) parsers.

use crate::address::address;
use crate::cidr;
use crate::cursor::Cursor;
use crate::error::{Literal, ParseFailure};
use crate::family::{Family, IpFamily};
use crate::number::{port, prefix_length};
use tracing::debug;

/// Parse `address:port`, or `[address]:port` for bracketed families.
///
/// The whole endpoint is given back if any part fails, including an address
/// that parsed fine on its own.
pub fn endpoint<F: IpFamily>(cursor: &mut Cursor<'_>) -> Result<(F::Octets, u16), ParseFailure> {
    let start = cursor.position();
    cursor
        .attempt(|c| {
            let octets = if F::BRACKETED {
                c.expect(b'[', Literal::Endpoint)?;
                let octets = address::<F>(c)?;
                c.expect(b']', Literal::Endpoint)?;
                octets
            } else {
                address::<F>(c)?
            };
            c.expect(b':', Literal::Endpoint)?;
            let port = port(c)?;
            Ok((octets, port))
        })
        .inspect_err(|e| debug!("no {} endpoint at offset {}: {}", F::LITERAL, start, e))
}

/// Parse `address/prefix` and clear the host bits of the address.
///
/// The returned octets are always the network address.
pub fn route<F: Family>(cursor: &mut Cursor<'_>) -> Result<(F::Octets, u8), ParseFailure> {
    let start = cursor.position();
    cursor
        .attempt(|c| {
            let mut octets = address::<F>(c)?;
            c.expect(b'/', Literal::Route)?;
            let prefix_len = prefix_length::<F>(c)?;
            cidr::network_address(octets.as_mut(), prefix_len);
            Ok((octets, prefix_len))
        })
        .inspect_err(|e| debug!("no {} route at offset {}: {}", F::LITERAL, start, e))
}
