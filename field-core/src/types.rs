/// Straight (non-premultiplied) RGBA color, one byte per channel.
///
/// Kept as a plain array so the core stays independent of any GUI
/// toolkit and serializes as `[r, g, b, a]`.
pub type Color = [u8; 4];
