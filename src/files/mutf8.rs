//! "Modified UTF-8", the per-string encoding of the string list format.
//!
//! Text is encoded as UTF-16 code units, each written as 1-3 bytes. NUL is
//! written as `C0 80` and characters outside the BMP as two 3-byte surrogates,
//! so the output never contains a zero byte or a 4-byte sequence.

/// Encodes `s` to modified UTF-8.
pub fn encode(s: &str) -> Vec<u8> {
	let mut out = Vec::with_capacity(s.len());
	for unit in s.encode_utf16() {
		match unit {
			0x0001..=0x007F => out.push(unit as u8),
			0x0000 | 0x0080..=0x07FF => {
				out.push(0xC0 | (unit >> 6) as u8);
				out.push(0x80 | (unit & 0x3F) as u8);
			}
			_ => {
				out.push(0xE0 | (unit >> 12) as u8);
				out.push(0x80 | ((unit >> 6) & 0x3F) as u8);
				out.push(0x80 | (unit & 0x3F) as u8);
			}
		}
	}
	out
}

/// Decodes modified UTF-8. Returns a description of the problem on malformed
/// input or unpaired surrogates.
pub fn decode(bytes: &[u8]) -> Result<String, String> {
	let mut units = Vec::with_capacity(bytes.len());
	let mut i = 0;

	while i < bytes.len() {
		let lead = bytes[i];
		match lead >> 4 {
			0x0..=0x7 => {
				units.push(u16::from(lead));
				i += 1;
			}
			0xC | 0xD => {
				let b1 = continuation(bytes, i + 1)?;
				units.push((u16::from(lead & 0x1F) << 6) | u16::from(b1 & 0x3F));
				i += 2;
			}
			0xE => {
				let b1 = continuation(bytes, i + 1)?;
				let b2 = continuation(bytes, i + 2)?;
				units.push((u16::from(lead & 0x0F) << 12) | (u16::from(b1 & 0x3F) << 6) | u16::from(b2 & 0x3F));
				i += 3;
			}
			_ => return Err(format!("malformed input around byte {i}")),
		}
	}

	String::from_utf16(&units).map_err(|_| "unpaired surrogate".to_string())
}

fn continuation(bytes: &[u8], at: usize) -> Result<u8, String> {
	match bytes.get(at) {
		Some(&b) if b & 0xC0 == 0x80 => Ok(b),
		Some(_) => Err(format!("malformed input around byte {at}")),
		None => Err("partial character at end of input".to_string()),
	}
}
