//! Zeichne ACOPOStrak-Layouts als SVG und erstelle Stücklisten.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use flexi_logger::{Duplicate, FileSpec, FlexiLoggerError, LogSpecBuilder, Logger, LoggerHandle};
use log::{info, LevelFilter};
use serde::Serialize;
use thiserror::Error;

use acopostrak_argumente::Argumente;
use acopostrak_gleis::{
    circuit::{Loop, LoopShape},
    shuttle::{shuttle_model, ShuttleModel, ShuttleParameters},
    track::{Track, TrackInfo},
    TrackError,
};
use acopostrak_typen::angle::Angle;
use acopostrak_zeichnen::asset::DirectoryAssets;

/// Bei der [Ausführung](ausführen) potentiell auftretende Fehler.
#[derive(Debug, Error)]
pub enum Fehler {
    /// Ein Fehler beim Starten des Loggers.
    #[error("Fehler beim Starten des Loggers: {0}")]
    FlexiLogger(#[from] FlexiLoggerError),
    /// Ein Fehler beim Erstellen, Zeichnen oder Speichern des Tracks.
    #[error(transparent)]
    Track(#[from] TrackError),
    /// Die Shuttle-Parameter sind kein gültiges JSON.
    #[error("Ungültige Shuttle-Parameter in '{}': {fehler}", .pfad.display())]
    Shuttle {
        /// Der Pfad der Datei.
        pfad: PathBuf,
        /// Der Fehler beim Parsen.
        #[source]
        fehler: serde_json::Error,
    },
    /// Ein Fehler beim Ausgeben der Stückliste.
    #[error("Fehler beim Ausgeben der Stückliste: {0}")]
    Json(#[from] serde_json::Error),
    /// Ein Fehler beim Lesen oder Schreiben einer Datei.
    #[error("Ein-/Ausgabe-Fehler für '{}': {fehler}", .pfad.display())]
    Io {
        /// Der Pfad der betroffenen Datei.
        pfad: PathBuf,
        /// Der aufgetretene Fehler.
        #[source]
        fehler: io::Error,
    },
    /// Es wurden weder Segmente noch eine Schleife angegeben.
    #[error("Es müssen entweder Segmente (--segmente) oder eine Schleife (--schleife) angegeben werden!")]
    KeinTrack,
    /// Es wurden sowohl Segmente als auch eine Schleife angegeben.
    #[error("Segmente (--segmente) und Schleife (--schleife) können nicht kombiniert werden!")]
    SegmenteUndSchleife,
}

/// Gesamtlänge, Segmente und ggf. das Shuttle-Modell.
#[derive(Debug, Serialize)]
struct Stückliste {
    /// Gesamtlänge und die benannten Segmente.
    #[serde(flatten)]
    track: TrackInfo,
    /// Das geprüfte Shuttle-Modell.
    #[serde(skip_serializing_if = "Option::is_none")]
    shuttle: Option<ShuttleModel>,
}

/// Parse die Kommandozeilen-Argumente und führe die Anwendung aus.
///
/// ## Errors
///
/// Fehler beim Erstellen, Zeichnen oder Ausgeben des Tracks.
#[inline]
pub fn ausführen_aus_env() -> Result<(), Fehler> {
    let argumente = Argumente::parse_aus_env_einzelnes_als_ausdruck();
    ausführen(argumente)
}

/// Starte den Logger. Log-Nachrichten gehen nach stderr und ggf. zusätzlich in eine Datei.
fn start_logger(verbose: bool, log_datei: bool) -> Result<LoggerHandle, FlexiLoggerError> {
    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let mut log_spec_builder = LogSpecBuilder::new();
    let _ = log_spec_builder.default(LevelFilter::Error).module("acopostrak", log_level);
    let log_spec = log_spec_builder.finalize();
    let logger_base = Logger::with(log_spec);
    let logger = if log_datei {
        logger_base
            .log_to_file(FileSpec::default().directory("log"))
            .duplicate_to_stderr(Duplicate::All)
    } else {
        logger_base.log_to_stderr()
    };
    logger.start()
}

/// Führe die Anwendung mit den übergebenen Kommandozeilen-Argumenten aus.
///
/// ## Errors
///
/// Fehler beim Erstellen, Zeichnen oder Ausgeben des Tracks.
pub fn ausführen(argumente: Argumente) -> Result<(), Fehler> {
    let Argumente {
        segmente,
        schleife,
        winkel,
        ausgabe,
        assets,
        präfix,
        modus,
        shuttle,
        verbose,
        log_datei,
    } = argumente;
    let logger_handle = start_logger(verbose, log_datei)?;

    let shuttle = shuttle.map(lade_shuttle_model).transpose()?;
    let (mut track, standard_datei) = erstelle_track(segmente, schleife, präfix)?;
    if modus.zeichnen() {
        let pfad = ausgabe.unwrap_or_else(|| standard_datei.to_owned());
        zeichne(&mut track, winkel, assets.map(DirectoryAssets::new), pfad)?;
    }
    if modus.info() {
        let stückliste = Stückliste { track: track.info(), shuttle };
        let mut stdout = io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &stückliste)?;
        writeln!(stdout).map_err(|fehler| Fehler::Io { pfad: PathBuf::from("<stdout>"), fehler })?;
    }

    // explizit drop aufrufen, damit logger_handle auf jeden Fall lang genug in scope bleibt.
    drop(logger_handle);

    Ok(())
}

/// Erstelle einen Track aus einem Track-Ausdruck oder eine Schleife.
/// Zusätzlich wird der Standard-Dateiname für die Zeichnung zurückgegeben.
fn erstelle_track(
    segmente: Option<String>,
    schleife: Option<String>,
    präfix: Option<String>,
) -> Result<(Track, &'static str), Fehler> {
    let präfix = präfix.unwrap_or_else(|| Track::DEFAULT_PREFIX.to_owned());
    match (segmente, schleife) {
        (Some(ausdruck), None) => {
            let track: Track = ausdruck.parse()?;
            let track = Track::new(track.segments().iter(), präfix, Track::DEFAULT_OFFSET)?;
            info!("Track mit {} Segmenten: {track}", track.len());
            Ok((track, "Track.svg"))
        },
        (None, Some(form)) => {
            let LoopShape { length, width } = form.parse()?;
            let schleife = Loop::with_naming(length, width, präfix, Track::DEFAULT_OFFSET)?;
            info!("Schleife {} mit {} Segmenten", schleife.shape(), schleife.len());
            Ok((Track::from(schleife), "Loop.svg"))
        },
        (None, None) => Err(Fehler::KeinTrack),
        (Some(_), Some(_)) => Err(Fehler::SegmenteUndSchleife),
    }
}

/// Zeichne den Track und speichere die Zeichnung unter `pfad`.
fn zeichne(
    track: &mut Track,
    winkel: Angle,
    assets: Option<DirectoryAssets>,
    pfad: impl AsRef<Path>,
) -> Result<(), TrackError> {
    let figure = match &assets {
        Some(assets) => track.render_with(winkel, assets)?,
        None => track.render(winkel)?,
    };
    let größe = figure.size();
    info!("Zeichnung mit {} x {} mm", größe.x, größe.y);
    track.save(pfad)
}

/// Lade Shuttle-Parameter aus einer JSON-Datei und prüfe, dass das Shuttle-Modell bestimmt ist.
///
/// ## Errors
///
/// Fehler beim Lesen oder Parsen der Datei, oder falls ein benötigter Parameter fehlt.
pub fn lade_shuttle_model(pfad: impl Into<PathBuf>) -> Result<ShuttleModel, Fehler> {
    let pfad = pfad.into();
    let json = fs::read_to_string(&pfad).map_err(|fehler| Fehler::Io { pfad: pfad.clone(), fehler })?;
    let parameter: ShuttleParameters = match serde_json::from_str(&json) {
        Ok(parameter) => parameter,
        Err(fehler) => return Err(Fehler::Shuttle { pfad, fehler }),
    };
    Ok(shuttle_model(&parameter)?)
}
