// Raw specification keys are camelCase Portuguese without accents
// ("potenciaMaxima"); display labels restore the accents.
const FRAGMENTS: &[(&str, &str)] = &[
    // motor & transmission
    ("diametro", "Diâmetro"),
    ("curso", "Curso"),
    ("compressao", "Compressão"),
    ("maxima", "Máxima"),
    ("maximo", "Máximo"),
    ("alimentacao", "Alimentação"),
    ("transmissao", "Transmissão"),
    ("final", "Final"),
    ("potencia", "Potência"),
    // dimensions & ergonomics
    ("altura", "Altura"),
    ("assento", "Assento"),
    ("distancia", "Distância"),
    ("entre", "Entre"),
    ("eixos", "Eixos"),
    ("largura", "Largura"),
    ("guidao", "Guidão"),
    ("capacidade", "Capacidade"),
    ("tanque", "Tanque"),
    ("peso", "Peso"),
    ("ordem", "Ordem"),
    ("marcha", "Marcha"),
];

fn split_words(raw_key: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    for (idx, ch) in raw_key.char_indices() {
        if ch.is_uppercase() && idx > start {
            words.push(&raw_key[start..idx]);
            start = idx;
        }
    }
    if start < raw_key.len() {
        words.push(&raw_key[start..]);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turns a raw field key into its display label. Known fragments get their
/// accented spelling, anything else is split on capitals and capitalized.
pub fn field_label(raw_key: &str) -> String {
    split_words(raw_key.trim())
        .into_iter()
        .map(|word| {
            FRAGMENTS
                .iter()
                .find(|(fragment, _)| fragment.eq_ignore_ascii_case(word))
                .map(|(_, display)| display.to_string())
                .unwrap_or_else(|| capitalize(word))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_fragments() {
        assert_eq!(field_label("compressaoMaxima"), "Compressão Máxima");
        assert_eq!(field_label("potenciaMaxima"), "Potência Máxima");
        assert_eq!(field_label("diametroCurso"), "Diâmetro Curso");
        assert_eq!(field_label("distanciaEntreEixos"), "Distância Entre Eixos");
        assert_eq!(field_label("alturaAssento"), "Altura Assento");
    }

    #[test]
    fn test_unmapped_key_falls_back_to_split_and_capitalize() {
        assert_eq!(field_label("customField"), "Custom Field");
        assert_eq!(field_label("cilindrada"), "Cilindrada");
        assert_eq!(field_label("pesoEmOrdemDeMarcha"), "Peso Em Ordem De Marcha");
    }

    #[test]
    fn test_degenerate_keys() {
        assert_eq!(field_label(""), "");
        assert_eq!(field_label("ABS"), "A B S");
        assert_eq!(field_label("  torque "), "Torque");
    }
}
