//! 32-Bit-ARGB-Farbwert mit fester Hex-Darstellung (`AARRGGBB`).

use super::StorageError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gepackte ARGB-Farbe, Alpha im höchstwertigen Byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Argb(pub u32);

impl Argb {
    /// Opakes Schwarz
    pub const BLACK: Argb = Argb(0xFF00_0000);
    /// Opakes Rot
    pub const RED: Argb = Argb(0xFFFF_0000);
    /// Opakes Blau
    pub const BLUE: Argb = Argb(0xFF00_00FF);

    /// Setzt die Farbe aus vier Kanälen zusammen.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Argb(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Alpha-Kanal
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Rot-Kanal
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Grün-Kanal
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blau-Kanal
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Genau 8 Hex-Ziffern, Großbuchstaben, ohne Präfix.
    pub fn to_hex(self) -> String {
        format!("{:08X}", self.0)
    }

    /// Parst einen Hex-String (ohne `#`/`0x`) als 32-Bit-Wert.
    pub fn from_hex(text: &str) -> Result<Self, StorageError> {
        let trimmed = text.trim();
        if trimmed.starts_with('+') {
            return Err(StorageError::format(
                "color",
                format!("'{trimmed}' ist kein Hex-Farbwert"),
            ));
        }
        u32::from_str_radix(trimmed, 16)
            .map(Argb)
            .map_err(|e| StorageError::format("color", format!("'{trimmed}': {e}")))
    }

    /// Kanäle in RGBA-Reihenfolge (für Bildpuffer).
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Argb {
    type Error = StorageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Argb::from_hex(&value)
    }
}

impl From<Argb> for String {
    fn from(color: Argb) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_is_zero_padded_uppercase() {
        assert_eq!(Argb(0xFF11_2233).to_hex(), "FF112233");
        assert_eq!(Argb(0x0000_00ab).to_hex(), "000000AB");
        assert_eq!(Argb(0).to_hex(), "00000000");
    }

    #[test]
    fn test_hex_roundtrip() {
        for value in [0u32, 1, 0x7FFF_FFFF, 0x8000_0000, 0xDEAD_BEEF, u32::MAX] {
            let hex = Argb(value).to_hex();
            assert_eq!(hex.len(), 8);
            assert_eq!(Argb::from_hex(&hex).unwrap(), Argb(value));
        }
    }

    #[test]
    fn test_from_hex_rejects_invalid() {
        assert!(Argb::from_hex("").is_err());
        assert!(Argb::from_hex("GG000000").is_err());
        assert!(Argb::from_hex("1FF112233").is_err());
        assert!(Argb::from_hex("+FF11223").is_err());
    }

    #[test]
    fn test_channels() {
        let color = Argb::from_argb(0xFF, 0x11, 0x22, 0x33);
        assert_eq!(color, Argb(0xFF11_2233));
        assert_eq!((color.a(), color.r(), color.g(), color.b()), (0xFF, 0x11, 0x22, 0x33));
        assert_eq!(color.to_rgba(), [0x11, 0x22, 0x33, 0xFF]);
    }
}
