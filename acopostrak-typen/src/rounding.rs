//! Runden auf eine feste Anzahl an Nachkommastellen.

/// Anzahl Nachkommastellen, auf die Positionen und Winkel beim Platzieren gerundet werden.
pub const DECIMALS: i32 = 3;

/// Runde `wert` auf `stellen` Nachkommastellen.
///
/// Bei exakt mittigen Werten wird zur geraden Ziffer gerundet.
#[must_use]
pub fn round_to(wert: f64, stellen: i32) -> f64 {
    let faktor = 10_f64.powi(stellen);
    (wert * faktor).round_ties_even() / faktor
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn drei_nachkommastellen() {
        assert_eq!(round_to(1.234_56, DECIMALS), 1.235, "aufrunden");
        assert_eq!(round_to(-0.000_4, DECIMALS), 0., "betragsmäßig kleine Werte werden 0");
        assert_eq!(round_to(10.074, DECIMALS), 10.074, "exakte Werte bleiben unverändert");
    }
}
