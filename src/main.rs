//! Zeichne ACOPOStrak-Layouts als SVG und erstelle Stücklisten.

// Zu viele/große dependencies, um das wirklich zu vermeiden.
#![allow(clippy::multiple_crate_versions)]

use acopostrak::{ausführen_aus_env, Fehler};

fn main() -> Result<(), Fehler> {
    ausführen_aus_env()
}
