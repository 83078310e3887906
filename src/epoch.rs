use crate::{
    datetime::UtcDateTime,
    error::Error,
    iso::{days_from_date, DayFraction, IsoDays},
};

/// A well known zero point for integer times.
///
/// Every epoch starts at midnight (UTC) on a fixed date. Several epochs are
/// aliases for one another: [`Epoch::Win`], [`Epoch::WinNt`],
/// [`Epoch::Win32`], [`Epoch::Cobol`] and [`Epoch::Ntfs`] all start on
/// `1601-01-01`, for example. Each alias is still its own variant so that
/// its name round trips through [`Epoch::name`] and [`FromStr`].
///
/// The day on which every epoch starts is computed once, at compile time.
///
/// # Example
///
/// ```
/// use utc_datetime::{Epoch, TimeUnit, UtcDateTime};
///
/// assert_eq!(Epoch::Unix.date().to_string(), "1970-01-01T00:00:00Z");
/// assert_eq!(Epoch::Gps.date().to_string(), "1980-01-06T00:00:00Z");
///
/// let dt = UtcDateTime::constant(1980, 1, 7, 0, 0, 0);
/// assert_eq!(dt.to_epoch(Epoch::Gps, TimeUnit::Second), 86_400);
/// assert_eq!(dt.to_epoch(Epoch::Dos, TimeUnit::Second), 6 * 86_400);
///
/// let epoch: Epoch = "win32".parse()?;
/// assert_eq!(epoch.date(), Epoch::Ntfs.date());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// [`FromStr`]: core::str::FromStr
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Epoch {
    /// `0001-01-01`, used by Go's `time` package.
    Go,
    /// `0001-01-01`, used by .NET's `DateTime`.
    DotNet,
    /// `0001-01-01`, used by REXX.
    Rexx,
    /// `0001-01-01`, the first day of the Rata Die day count.
    RataDie,
    /// `1582-10-15`, the start of the Gregorian calendar, used by UUIDs.
    Uuid,
    /// `1601-01-01`, used by Windows.
    Win,
    /// `1601-01-01`, used by Windows NT.
    WinNt,
    /// `1601-01-01`, used by the Win32 `FILETIME` structure.
    Win32,
    /// `1601-01-01`, used by COBOL.
    Cobol,
    /// `1601-01-01`, used by NTFS file times.
    Ntfs,
    /// `1840-12-31`, used by MUMPS.
    Mumps,
    /// `1858-11-17`, used by OpenVMS.
    Vms,
    /// `1858-11-17`, used by the US Naval Observatory.
    Usno,
    /// `1858-11-17`, used by DVB.
    Dvb,
    /// `1858-11-17`, the Modified Julian Date.
    Mjd,
    /// `1899-12-30`, used by Microsoft COM dates.
    MsCom,
    /// `1899-12-30`, used by Object Pascal.
    ObjectPascal,
    /// `1899-12-30`, used by LibreOffice Calc.
    LibreOfficeCalc,
    /// `1899-12-30`, used by Google Sheets.
    GoogleSheets,
    /// `1899-12-31`, used by Microsoft Excel.
    MsExcel,
    /// `1899-12-31`, used by Lotus 1-2-3.
    Lotus123,
    /// `1900-01-01`, used by NTP.
    Ntp,
    /// `1900-01-01`, used by IBM CICS.
    IbmCics,
    /// `1900-01-01`, used by Mathematica.
    Mathematica,
    /// `1900-01-01`, used by RISC OS.
    RiscOs,
    /// `1900-01-01`, used by Common Lisp.
    CommonLisp,
    /// `1900-01-01`, used by VME.
    Vme,
    /// `1900-01-01`, used by the Michigan Terminal System.
    MichiganTerminalSystem,
    /// `1904-01-01`, used by LabVIEW.
    LabView,
    /// `1904-01-01`, used by classic Mac OS.
    MacOs,
    /// `1904-01-01`, used by Palm OS.
    PalmOs,
    /// `1904-01-01`, used by MP4 files.
    Mp4,
    /// `1904-01-01`, used by Microsoft Excel on Mac.
    MsExcelMac,
    /// `1904-01-01`, used by Igor Pro.
    Igor,
    /// `1970-01-01`, used by Unix.
    Unix,
    /// `1970-01-01`, used by POSIX.
    Posix,
    /// `1978-01-01`, used by AmigaOS.
    AmigaOs,
    /// `1980-01-01`, used by DOS.
    Dos,
    /// `1980-01-01`, used by OS/2.
    Os2,
    /// `1980-01-01`, used by FAT file systems.
    Fat,
    /// `1980-01-06`, used by GPS.
    Gps,
    /// `1980-01-06`, used by Qualcomm.
    Qualcomm,
    /// `2000-01-01`, used by AppleSingle.
    AppleSingle,
    /// `2000-01-01`, used by AppleDouble.
    AppleDouble,
    /// `2000-01-01`, used by PostgreSQL.
    PostgreSql,
    /// `2000-01-01`, used by ZigBee.
    ZigBee,
    /// `2001-01-01`, used by Apple's Core Foundation.
    Apple,
}

/// The first day of each epoch, indexed by `Epoch as usize`.
static DAYS: [i64; Epoch::ALL.len()] = {
    let mut days = [0; Epoch::ALL.len()];
    let mut i = 0;
    while i < Epoch::ALL.len() {
        let (year, month, day) = Epoch::ALL[i].ymd();
        days[i] = days_from_date(year as i64, month, day);
        i += 1;
    }
    days
};

impl Epoch {
    /// Every epoch, in order of their start dates.
    pub const ALL: [Epoch; 47] = [
        Epoch::Go,
        Epoch::DotNet,
        Epoch::Rexx,
        Epoch::RataDie,
        Epoch::Uuid,
        Epoch::Win,
        Epoch::WinNt,
        Epoch::Win32,
        Epoch::Cobol,
        Epoch::Ntfs,
        Epoch::Mumps,
        Epoch::Vms,
        Epoch::Usno,
        Epoch::Dvb,
        Epoch::Mjd,
        Epoch::MsCom,
        Epoch::ObjectPascal,
        Epoch::LibreOfficeCalc,
        Epoch::GoogleSheets,
        Epoch::MsExcel,
        Epoch::Lotus123,
        Epoch::Ntp,
        Epoch::IbmCics,
        Epoch::Mathematica,
        Epoch::RiscOs,
        Epoch::CommonLisp,
        Epoch::Vme,
        Epoch::MichiganTerminalSystem,
        Epoch::LabView,
        Epoch::MacOs,
        Epoch::PalmOs,
        Epoch::Mp4,
        Epoch::MsExcelMac,
        Epoch::Igor,
        Epoch::Unix,
        Epoch::Posix,
        Epoch::AmigaOs,
        Epoch::Dos,
        Epoch::Os2,
        Epoch::Fat,
        Epoch::Gps,
        Epoch::Qualcomm,
        Epoch::AppleSingle,
        Epoch::AppleDouble,
        Epoch::PostgreSql,
        Epoch::ZigBee,
        Epoch::Apple,
    ];

    /// Returns the `snake_case` name of this epoch.
    ///
    /// This is the name accepted by the `FromStr` impl and used when
    /// serializing.
    ///
    /// # Example
    ///
    /// ```
    /// use utc_datetime::Epoch;
    ///
    /// assert_eq!(Epoch::WinNt.name(), "win_nt");
    /// assert_eq!(Epoch::PostgreSql.name(), "postgresql");
    /// ```
    pub const fn name(self) -> &'static str {
        match self {
            Epoch::Go => "go",
            Epoch::DotNet => "dot_net",
            Epoch::Rexx => "rexx",
            Epoch::RataDie => "rata_die",
            Epoch::Uuid => "uuid",
            Epoch::Win => "win",
            Epoch::WinNt => "win_nt",
            Epoch::Win32 => "win32",
            Epoch::Cobol => "cobol",
            Epoch::Ntfs => "ntfs",
            Epoch::Mumps => "mumps",
            Epoch::Vms => "vms",
            Epoch::Usno => "usno",
            Epoch::Dvb => "dvb",
            Epoch::Mjd => "mjd",
            Epoch::MsCom => "ms_com",
            Epoch::ObjectPascal => "object_pascal",
            Epoch::LibreOfficeCalc => "libre_office_calc",
            Epoch::GoogleSheets => "google_sheets",
            Epoch::MsExcel => "ms_excel",
            Epoch::Lotus123 => "lotus_123",
            Epoch::Ntp => "ntp",
            Epoch::IbmCics => "ibm_cics",
            Epoch::Mathematica => "mathematica",
            Epoch::RiscOs => "risc_os",
            Epoch::CommonLisp => "common_lisp",
            Epoch::Vme => "vme",
            Epoch::MichiganTerminalSystem => "michigan_terminal_system",
            Epoch::LabView => "lab_view",
            Epoch::MacOs => "mac_os",
            Epoch::PalmOs => "palm_os",
            Epoch::Mp4 => "mp4",
            Epoch::MsExcelMac => "ms_excel_mac",
            Epoch::Igor => "igor",
            Epoch::Unix => "unix",
            Epoch::Posix => "posix",
            Epoch::AmigaOs => "amiga_os",
            Epoch::Dos => "dos",
            Epoch::Os2 => "os2",
            Epoch::Fat => "fat",
            Epoch::Gps => "gps",
            Epoch::Qualcomm => "qualcomm",
            Epoch::AppleSingle => "apple_single",
            Epoch::AppleDouble => "apple_double",
            Epoch::PostgreSql => "postgresql",
            Epoch::ZigBee => "zigbee",
            Epoch::Apple => "apple",
        }
    }

    /// Returns the first instant of this epoch.
    #[inline]
    pub const fn date(self) -> UtcDateTime {
        let (year, month, day) = self.ymd();
        UtcDateTime::constant(year, month, day, 0, 0, 0)
    }

    /// Returns the first instant of this epoch as a number of days since
    /// `0000-01-01`.
    #[inline]
    pub fn iso_days(self) -> IsoDays {
        IsoDays { days: self.days(), fraction: DayFraction::MIDNIGHT }
    }

    /// Returns the day count of this epoch.
    #[inline]
    pub(crate) fn days(self) -> i64 {
        DAYS[self as usize]
    }

    const fn ymd(self) -> (i32, i8, i8) {
        use self::Epoch::*;

        match self {
            Go | DotNet | Rexx | RataDie => (1, 1, 1),
            Uuid => (1582, 10, 15),
            Win | WinNt | Win32 | Cobol | Ntfs => (1601, 1, 1),
            Mumps => (1840, 12, 31),
            Vms | Usno | Dvb | Mjd => (1858, 11, 17),
            MsCom | ObjectPascal | LibreOfficeCalc | GoogleSheets => {
                (1899, 12, 30)
            }
            MsExcel | Lotus123 => (1899, 12, 31),
            Ntp | IbmCics | Mathematica | RiscOs | CommonLisp | Vme
            | MichiganTerminalSystem => (1900, 1, 1),
            LabView | MacOs | PalmOs | Mp4 | MsExcelMac | Igor => {
                (1904, 1, 1)
            }
            Unix | Posix => (1970, 1, 1),
            AmigaOs => (1978, 1, 1),
            Dos | Os2 | Fat => (1980, 1, 1),
            Gps | Qualcomm => (1980, 1, 6),
            AppleSingle | AppleDouble | PostgreSql | ZigBee => (2000, 1, 1),
            Apple => (2001, 1, 1),
        }
    }
}

impl core::fmt::Display for Epoch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for Epoch {
    type Err = Error;

    fn from_str(name: &str) -> Result<Epoch, Error> {
        Epoch::ALL
            .iter()
            .copied()
            .find(|epoch| epoch.name() == name)
            .ok_or_else(|| Error::unknown_epoch(name))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Epoch {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Epoch {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Epoch, D::Error> {
        use serde::de;

        struct EpochVisitor;

        impl<'de> de::Visitor<'de> for EpochVisitor {
            type Value = Epoch;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("the snake_case name of an epoch")
            }

            #[inline]
            fn visit_str<E: de::Error>(self, value: &str) -> Result<Epoch, E> {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(EpochVisitor)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::{iso::UNIX_EPOCH_DAYS, ErrorKind};

    use super::*;

    #[test]
    fn table_is_in_variant_order() {
        for (i, &epoch) in Epoch::ALL.iter().enumerate() {
            assert_eq!(epoch as usize, i, "{epoch:?}");
        }
        for pair in Epoch::ALL.windows(2) {
            assert!(pair[0].days() <= pair[1].days(), "{pair:?}");
        }
    }

    #[test]
    fn well_known_days() {
        assert_eq!(Epoch::Unix.days(), UNIX_EPOCH_DAYS);
        assert_eq!(Epoch::Posix.days(), UNIX_EPOCH_DAYS);
        assert_eq!(Epoch::Ntfs.days(), 584_754);
        assert_eq!(Epoch::Go.days(), 366);
        // The Modified Julian Date epoch is 678,941 days after day zero.
        assert_eq!(Epoch::Mjd.days(), 678_941);
        assert_eq!(UNIX_EPOCH_DAYS - Epoch::Ntp.days(), 25_567);
        assert_eq!(Epoch::Gps.days() - UNIX_EPOCH_DAYS, 3_657);
        assert_eq!(Epoch::Apple.days() - UNIX_EPOCH_DAYS, 11_323);
    }

    #[test]
    fn dates_agree_with_days() {
        for epoch in Epoch::ALL {
            let date = epoch.date();
            assert_eq!(date.to_iso_days(), epoch.iso_days(), "{epoch:?}");
            assert_eq!(date.subsecond().precision(), 0);
        }
    }

    #[test]
    fn aliases() {
        let win = Epoch::Win.date();
        for epoch in [Epoch::WinNt, Epoch::Win32, Epoch::Cobol, Epoch::Ntfs] {
            assert_eq!(epoch.date(), win);
        }
        assert_eq!(Epoch::Posix.date(), Epoch::Unix.date());
        assert_eq!(
            Epoch::Lotus123.date().to_string(),
            "1899-12-31T00:00:00Z",
        );
    }

    #[test]
    fn names_roundtrip() {
        for epoch in Epoch::ALL {
            assert_eq!(epoch.name().parse::<Epoch>().unwrap(), epoch);
            assert_eq!(epoch.to_string(), epoch.name());
        }
        let err = "windows".parse::<Epoch>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        insta::assert_snapshot!(err, @r###"unknown epoch name "windows""###);
        assert!("Unix".parse::<Epoch>().is_err());
    }
}
