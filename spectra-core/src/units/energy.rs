//! Photon-energy units, canonical unit electron-volts
//!
//! Electron-volts rather than joules because every interesting photon
//! energy lands in a readable eV range (radio photons in µeV, visible light
//! around 2 eV, gamma in MeV). Note the two case-distinct symbols `meV`
//! (milli) and `MeV` (mega): symbol resolution matches exact case first, so
//! both stay addressable; a sloppily cased "mev" resolves to the mega unit
//! because the table is searched largest first.

use super::{QuantityKind, UnitScale};

/// Photon-energy units, largest to smallest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnergyUnit {
    /// TeV, 1e12 eV
    TeraElectronVolts,
    /// GeV, 1e9 eV
    GigaElectronVolts,
    /// MeV, 1e6 eV
    MegaElectronVolts,
    /// keV, 1e3 eV
    KiloElectronVolts,
    /// eV, the canonical unit
    ElectronVolts,
    /// meV, 1e-3 eV
    MilliElectronVolts,
    /// µeV, 1e-6 eV
    MicroElectronVolts,
}

impl UnitScale for EnergyUnit {
    const KIND: QuantityKind = QuantityKind::Energy;
    const CANONICAL: Self = Self::ElectronVolts;
    const ALL: &'static [Self] = &[
        Self::TeraElectronVolts,
        Self::GigaElectronVolts,
        Self::MegaElectronVolts,
        Self::KiloElectronVolts,
        Self::ElectronVolts,
        Self::MilliElectronVolts,
        Self::MicroElectronVolts,
    ];

    fn factor(self) -> f64 {
        match self {
            Self::TeraElectronVolts => 1e12,
            Self::GigaElectronVolts => 1e9,
            Self::MegaElectronVolts => 1e6,
            Self::KiloElectronVolts => 1e3,
            Self::ElectronVolts => 1.0,
            Self::MilliElectronVolts => 1e-3,
            Self::MicroElectronVolts => 1e-6,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::TeraElectronVolts => "TeV",
            Self::GigaElectronVolts => "GeV",
            Self::MegaElectronVolts => "MeV",
            Self::KiloElectronVolts => "keV",
            Self::ElectronVolts => "eV",
            Self::MilliElectronVolts => "meV",
            Self::MicroElectronVolts => "µeV",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Self::TeraElectronVolts => "tera-electron-volts",
            Self::GigaElectronVolts => "giga-electron-volts",
            Self::MegaElectronVolts => "mega-electron-volts",
            Self::KiloElectronVolts => "kilo-electron-volts",
            Self::ElectronVolts => "electron-volts",
            Self::MilliElectronVolts => "milli-electron-volts",
            Self::MicroElectronVolts => "micro-electron-volts",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            // ASCII spelling for keyboards without a micro sign
            Self::MicroElectronVolts => &["ueV"],
            _ => &[],
        }
    }
}
