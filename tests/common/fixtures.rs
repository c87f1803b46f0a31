//! Static salary corpora and feed documents used across harnesses.

/// Salary strings in every recognised shape, as they appear in the feed.
pub const CORPUS_RECOGNISED: &[&str] = &[
    "",
    "   ",
    "od 4000 zł do 6000 zł brutto",
    "od 4000 do 6000 zł brutto",
    "od 3500,50 zł do 4200 zł netto",
    "około 4500 zł netto",
    "około 7000 zł brutto",
    "nie mniej niż 3000 zł brutto",
    "nie mniej niż 2800,00 zł netto",
    "5000",
    "5000,50",
    "6200 zł brutto",
    "4000.",
];

/// Salary strings that match no shape and must be reported, not guessed.
pub const CORPUS_UNRECOGNISED: &[&str] = &[
    "do negocjacji",
    "zgodnie z rozporządzeniem",
    "4000 - 6000 zł brutto",
    "od 4000 zł",
    "5000 zł",
    "5000,125",
    "około 4000-5000 zł brutto",
    "-5000",
];

/// A small export in the shape of the vacancy feed.
pub const FEED_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<oferty>
  <oferta>
    <stanowisko>referent</stanowisko>
    <do_spraw>obsługi kancelarii</do_spraw>
    <nazwa_firmy>Urząd Wojewódzki w Krakowie</nazwa_firmy>
    <komorka_organizacyjna>Wydział Organizacji</komorka_organizacyjna>
    <miejsce_wykonywania_pracy>Kraków</miejsce_wykonywania_pracy>
    <wymiaretatu>pełny etat</wymiaretatu>
    <liczba_stanowisk_pracy>2</liczba_stanowisk_pracy>
    <wynagrodzenie>od 4000 zł do 6000 zł brutto</wynagrodzenie>
    <url>https://nabory.example/1</url>
    <data_wprowadzenia>2024-05-06</data_wprowadzenia>
    <etykieta_staz>Staż pracy</etykieta_staz>
  </oferta>
  <oferta>
    <stanowisko>inspektor</stanowisko>
    <nazwa_firmy>Ministerstwo Finansów</nazwa_firmy>
    <miejsce_wykonywania_pracy>Warszawa</miejsce_wykonywania_pracy>
    <wymiaretatu>1/2</wymiaretatu>
    <liczba_stanowisk_pracy>1</liczba_stanowisk_pracy>
    <wynagrodzenie>około 4500 zł netto</wynagrodzenie>
    <url>https://nabory.example/2</url>
  </oferta>
  <oferta>
    <stanowisko>specjalista</stanowisko>
    <nazwa_firmy>Główny Urząd Statystyczny</nazwa_firmy>
    <miejsce_wykonywania_pracy>Gdańsk</miejsce_wykonywania_pracy>
    <wymiaretatu></wymiaretatu>
    <wynagrodzenie></wynagrodzenie>
    <url>https://nabory.example/3</url>
  </oferta>
  <oferta>
    <stanowisko>starszy specjalista</stanowisko>
    <nazwa_firmy>Urząd Skarbowy</nazwa_firmy>
    <miejsce_wykonywania_pracy>Łódź</miejsce_wykonywania_pracy>
    <wymiaretatu>3/4</wymiaretatu>
    <liczba_stanowisk_pracy>1</liczba_stanowisk_pracy>
    <wynagrodzenie>nie mniej niż 10000 zł brutto</wynagrodzenie>
    <url>https://nabory.example/4</url>
  </oferta>
  <oferta>
    <stanowisko>asystent</stanowisko>
    <nazwa_firmy>Kuratorium Oświaty</nazwa_firmy>
    <miejsce_wykonywania_pracy>Poznań</miejsce_wykonywania_pracy>
    <wymiaretatu>0,5</wymiaretatu>
    <liczba_stanowisk_pracy>3</liczba_stanowisk_pracy>
    <wynagrodzenie>5000,50 zł brutto</wynagrodzenie>
    <url>https://nabory.example/5</url>
  </oferta>
</oferty>
"#;

/// The same export with one posting whose salary needs a new rule.
pub const FEED_XML_WITH_UNRECOGNISED: &str = r#"<oferty>
  <oferta>
    <stanowisko>referent</stanowisko>
    <wynagrodzenie>5000 zł brutto</wynagrodzenie>
  </oferta>
  <oferta>
    <stanowisko>radca</stanowisko>
    <wynagrodzenie>do negocjacji</wynagrodzenie>
  </oferta>
  <oferta>
    <stanowisko>kierowca</stanowisko>
    <wynagrodzenie>około 3900 zł brutto</wynagrodzenie>
  </oferta>
</oferty>"#;

/// Generate `n` recognised salary strings cycling through every shape.
pub fn corpus_high_volume(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let base = 3000 + (i % 50) * 100;
            match i % 5 {
                0 => format!("od {base} zł do {} zł brutto", base + 1500),
                1 => format!("około {base} zł netto"),
                2 => format!("nie mniej niż {base},50 zł brutto"),
                3 => format!("{base} zł brutto"),
                _ => String::new(),
            }
        })
        .collect()
}
