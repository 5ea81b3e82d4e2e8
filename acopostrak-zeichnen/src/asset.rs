//! Vektor-Grafiken und die Sammlungen, aus denen sie geladen werden.

use std::{
    borrow::Cow,
    fmt::{self, Debug, Formatter},
    fs,
    io::ErrorKind,
    ops::Range,
    path::{Path, PathBuf},
};

use log::debug;

use crate::RenderError;

/// Eine geladene und geprüfte SVG-Grafik.
///
/// Längen innerhalb der Grafik werden als Millimeter interpretiert.
#[derive(Clone, PartialEq, Eq)]
pub struct Asset {
    /// Die Id, unter der die Grafik gefunden wurde.
    id: String,
    /// Der vollständige Text des SVG-Dokuments.
    svg: Cow<'static, str>,
    /// Byte-Bereich des `<svg>`-Wurzel-Elements innerhalb von `svg`.
    wurzel: Range<usize>,
}

impl Debug for Asset {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Asset")
            .field("id", &self.id)
            .field("wurzel", &self.wurzel)
            .finish_non_exhaustive()
    }
}

impl Asset {
    /// Parse `svg` und stelle sicher, dass es sich um ein SVG-Dokument handelt.
    ///
    /// ## Errors
    ///
    /// [`RenderError::InvalidXml`] bei ungültigem XML,
    /// [`RenderError::NoSvgRoot`] falls das Wurzel-Element nicht `<svg>` ist.
    pub fn parse(id: impl Into<String>, svg: impl Into<Cow<'static, str>>) -> Result<Self, RenderError> {
        let id = id.into();
        let svg = svg.into();
        let wurzel = {
            let dokument = match roxmltree::Document::parse(&svg) {
                Ok(dokument) => dokument,
                Err(fehler) => return Err(RenderError::InvalidXml { id, fehler }),
            };
            let element = dokument.root_element();
            let name = element.tag_name().name();
            if name != "svg" {
                return Err(RenderError::NoSvgRoot { id, wurzel: name.to_owned() });
            }
            element.range()
        };
        Ok(Asset { id, svg, wurzel })
    }

    /// Die Id, unter der die Grafik gefunden wurde.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Das `<svg>`-Element ohne XML-Deklaration oder Kommentare außerhalb davon.
    #[must_use]
    pub fn fragment(&self) -> &str {
        self.svg.get(self.wurzel.clone()).unwrap_or_default()
    }
}

/// Eine Sammlung von Grafiken, die über ihre Id gefunden werden.
pub trait AssetSource {
    /// Lade die Grafik mit der gewünschten Id.
    ///
    /// ## Errors
    ///
    /// [`RenderError::AssetNotFound`] für unbekannte Ids, sonst Fehler beim Laden der Grafik.
    fn resolve(&self, id: &str) -> Result<Asset, RenderError>;
}

impl<T: AssetSource + ?Sized> AssetSource for &T {
    fn resolve(&self, id: &str) -> Result<Asset, RenderError> {
        (**self).resolve(id)
    }
}

/// Fest in das Programm eingebettete Grafiken.
#[derive(Debug, Clone, Copy)]
pub struct StaticAssets {
    /// Paare aus Id und SVG-Text.
    assets: &'static [(&'static str, &'static str)],
}

impl StaticAssets {
    /// Erzeuge eine Sammlung aus Paaren von Id und SVG-Text.
    #[must_use]
    pub const fn new(assets: &'static [(&'static str, &'static str)]) -> Self {
        StaticAssets { assets }
    }

    /// Alle bekannten Ids.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        self.assets.iter().map(|(id, _svg)| *id)
    }
}

impl AssetSource for StaticAssets {
    fn resolve(&self, id: &str) -> Result<Asset, RenderError> {
        let (id, svg) = self
            .assets
            .iter()
            .find(|(bekannt, _svg)| *bekannt == id)
            .ok_or_else(|| RenderError::AssetNotFound(id.to_owned()))?;
        Asset::parse(*id, Cow::Borrowed(*svg))
    }
}

/// Grafiken als Dateien in einem Verzeichnis; die Id ist der Dateiname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryAssets {
    /// Das Verzeichnis mit den Grafik-Dateien.
    verzeichnis: PathBuf,
}

impl DirectoryAssets {
    /// Verwende die Dateien im angegebenen Verzeichnis.
    #[must_use]
    pub fn new(verzeichnis: impl Into<PathBuf>) -> Self {
        DirectoryAssets { verzeichnis: verzeichnis.into() }
    }

    /// Das verwendete Verzeichnis.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.verzeichnis
    }
}

impl AssetSource for DirectoryAssets {
    fn resolve(&self, id: &str) -> Result<Asset, RenderError> {
        let pfad = self.verzeichnis.join(id);
        debug!("Lade Grafik {}", pfad.display());
        match fs::read_to_string(&pfad) {
            Ok(svg) => Asset::parse(id, svg),
            Err(fehler) if fehler.kind() == ErrorKind::NotFound => {
                Err(RenderError::AssetNotFound(id.to_owned()))
            },
            Err(fehler) => Err(RenderError::Io { pfad, fehler }),
        }
    }
}
