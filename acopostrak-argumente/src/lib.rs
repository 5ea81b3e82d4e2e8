//! Kommandozeilen-Argumente.

// Zu viele/große dependencies, um das wirklich zu vermeiden.
#![allow(clippy::multiple_crate_versions)]
// Durch derive-Macro für Parse ausgelöst.
#![allow(clippy::shadow_unrelated)]

use std::{
    env,
    ffi::OsString,
    fmt::{self, Debug, Display, Formatter},
    num::NonZeroI32,
};

use kommandozeilen_argumente::{EnumArgument, Parse};

use acopostrak_typen::angle::Angle;

#[derive(Debug, Clone, Parse)]
/// Zeichne ACOPOStrak-Layouts als SVG und erstelle Stücklisten.
#[kommandozeilen_argumente(sprache: deutsch, version, hilfe(lang: [hilfe, help], kurz: h))]
pub struct Argumente {
    /// Track-Ausdruck aus Segment-Typen, z.B. "aa*3 + ab + bb*3 + ba".
    #[kommandozeilen_argumente(kurz, meta_var: AUSDRUCK)]
    pub segmente: Option<String>,

    /// Geschlossene Schleife mit Länge und Breite in Segmenten, z.B. "4x2".
    #[kommandozeilen_argumente(meta_var: FORM)]
    pub schleife: Option<String>,

    /// Rotation des ersten Segments im Uhrzeigersinn.
    #[kommandozeilen_argumente(standard: Angle(0.), kurz, meta_var: GRAD)]
    pub winkel: Angle,

    /// Speichere die Zeichnung in der angegebenen Datei.
    #[kommandozeilen_argumente(kurz, meta_var: DATEI)]
    pub ausgabe: Option<String>,

    /// Lade die Segment-Grafiken aus einem Verzeichnis statt der eingebauten.
    #[kommandozeilen_argumente(meta_var: VERZEICHNIS)]
    pub assets: Option<String>,

    /// Präfix der Segment-Namen.
    #[kommandozeilen_argumente(meta_var: PRÄFIX)]
    pub präfix: Option<String>,

    /// Was ausgegeben wird.
    #[kommandozeilen_argumente(standard: ModusArgument::Beide, kurz, meta_var: MODUS)]
    pub modus: ModusArgument,

    /// Prüfe die Shuttle-Parameter in einer JSON-Datei.
    #[kommandozeilen_argumente(meta_var: DATEI)]
    pub shuttle: Option<String>,

    /// Zeige zusätzliche Informationen in der Konsole an.
    pub verbose: bool,

    /// Speichere Log-Nachrichten zusätzlich in einer Datei.
    #[kommandozeilen_argumente(kurz: l, invertiere_präfix: keine)]
    pub log_datei: bool,
}

impl Argumente {
    /// Parse Kommandozeilen-Argumente.
    /// Ein einzelnes Argument (das nicht mit "-" beginnt) wird als Track-Ausdruck interpretiert.
    ///
    /// ## Panics
    ///
    /// Programmierfehler, wenn [`NonZeroI32::new`] [`None`] für den Exit-Code zurückgibt.
    #[must_use]
    pub fn parse_aus_env_einzelnes_als_ausdruck() -> Self {
        Argumente::parse_einzelnes_als_ausdruck(env::args_os().skip(1))
    }

    /// Wie [`parse_aus_env_einzelnes_als_ausdruck`](Argumente::parse_aus_env_einzelnes_als_ausdruck),
    /// aber mit expliziten Argumenten (ohne Programm-Namen).
    ///
    /// ## Panics
    ///
    /// Programmierfehler, wenn [`NonZeroI32::new`] [`None`] für den Exit-Code zurückgibt.
    #[must_use]
    pub fn parse_einzelnes_als_ausdruck(args: impl IntoIterator<Item = OsString>) -> Self {
        let mut args: Vec<_> = args.into_iter().collect();
        if args.len() == 1
            && !args
                .first()
                .and_then(|os_string| os_string.to_str())
                .is_some_and(|string| string.starts_with('-'))
        {
            // Einzelnes Argument, dass nicht mit '-' beginnt.
            args.insert(0, "--segmente".to_owned().into());
        }
        Argumente::parse_mit_fehlermeldung(args.into_iter(), NonZeroI32::new(1).expect("1 != 0"))
    }
}

/// Was nach dem Erstellen des Tracks ausgegeben wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumArgument)]
#[kommandozeilen_argumente(case: insensitive)]
pub enum ModusArgument {
    /// Speichere nur die Zeichnung.
    Zeichnen,
    /// Gebe nur die Stückliste als JSON aus.
    Info,
    /// Zeichnung und Stückliste.
    Beide,
}

impl ModusArgument {
    /// Soll eine Zeichnung erstellt werden?
    #[must_use]
    pub fn zeichnen(self) -> bool {
        matches!(self, ModusArgument::Zeichnen | ModusArgument::Beide)
    }

    /// Soll die Stückliste ausgegeben werden?
    #[must_use]
    pub fn info(self) -> bool {
        matches!(self, ModusArgument::Info | ModusArgument::Beide)
    }
}

impl Display for ModusArgument {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, formatter)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> Argumente {
        Argumente::parse_einzelnes_als_ausdruck(args.iter().map(OsString::from))
    }

    #[test]
    fn einzelnes_argument_ist_ausdruck() {
        let argumente = parse(&["aa*2 + bb"]);
        assert_eq!(argumente.segmente.as_deref(), Some("aa*2 + bb"), "Ausdruck übernommen");
        assert_eq!(argumente.modus, ModusArgument::Beide, "Standard-Modus");
        assert_eq!(argumente.winkel, Angle::ZERO, "Standard-Winkel");
        assert!(!argumente.verbose && !argumente.log_datei, "Standard-Flags");
    }

    #[test]
    fn alle_optionen() {
        let argumente = parse(&[
            "--schleife",
            "4x2",
            "--winkel",
            "45",
            "--ausgabe",
            "Loop.svg",
            "--modus",
            "info",
            "--verbose",
        ]);
        assert_eq!(argumente.schleife.as_deref(), Some("4x2"), "Schleife");
        assert_eq!(argumente.winkel, Angle(45.), "Winkel");
        assert_eq!(argumente.ausgabe.as_deref(), Some("Loop.svg"), "Ausgabe");
        assert_eq!(argumente.modus, ModusArgument::Info, "Modus");
        assert!(argumente.verbose, "verbose");
        assert!(argumente.segmente.is_none(), "kein Ausdruck");
    }

    #[test]
    fn winkel_mit_voller_genauigkeit() {
        let argumente = parse(&["--winkel", "33.3", "--segmente", "aa"]);
        assert_eq!(argumente.winkel, Angle(33.3), "Winkel ohne Rundungsfehler");
    }

    #[test]
    fn modus() {
        assert!(ModusArgument::Beide.zeichnen() && ModusArgument::Beide.info(), "beide");
        assert!(!ModusArgument::Info.zeichnen(), "nur Info");
        assert!(!ModusArgument::Zeichnen.info(), "nur Zeichnen");
    }
}
