use enumflags2::{bitflags, BitFlags};

/// A single bit of section liveness.
///
/// Two bits are meaningful to this crate: whether a section was reached from
/// a user-supplied seed ([`ColorBit::Live`]), and whether it was reached only
/// through a relocation whose source section is unknown to the inventory
/// ([`ColorBit::WeaklyLive`]). Any other bit is reserved for callers that
/// want to track additional provenance without losing the two built-in ones.
#[bitflags]
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBit {
    /// Set by coloring from a user-supplied seed symbol.
    Live = 0x0000_0001,
    /// Set by coloring from a relocation whose source section isn't
    /// inventoried. Kept distinct from [`ColorBit::Live`] so dumps can tell
    /// the two provenances apart.
    WeaklyLive = 0x8000_0000,
}

/// A section's color: the bitwise union of every [`ColorBit`] that reached it.
///
/// `Color::empty()` is the initial, unreachable state. Coloring only ever
/// adds bits (`color |= bit`), never removes them.
pub type Color = BitFlags<ColorBit>;
