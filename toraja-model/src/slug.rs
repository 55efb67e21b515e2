/// URL slug from free text: lowercase ASCII words joined by `-`.
///
/// Apostrophes are dropped rather than split on, so `Rambu Solo'` becomes
/// `rambu-solo` and `Lemo's` becomes `lemos`.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.chars() {
        if matches!(ch, '\'' | '\u{2019}' | '`') {
            continue;
        }
        match fold_ascii(ch) {
            Some(c) => {
                if pending_dash && !out.is_empty() {
                    out.push('-');
                }
                pending_dash = false;
                out.push(c);
            }
            None => pending_dash = true,
        }
    }

    out
}

fn fold_ascii(ch: char) -> Option<char> {
    if ch.is_ascii_alphanumeric() {
        return Some(ch.to_ascii_lowercase());
    }
    let folded = match ch.to_lowercase().next()? {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn joins_words_with_single_dashes() {
        assert_eq!(slugify("  Kete  Kesu -- Village "), "kete-kesu-village");
    }

    #[test]
    fn drops_apostrophes_and_folds_accents() {
        assert_eq!(slugify("Rambu Solo'"), "rambu-solo");
        assert_eq!(slugify("Café Tongkonan"), "cafe-tongkonan");
    }

    #[test]
    fn empty_and_symbol_only_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
