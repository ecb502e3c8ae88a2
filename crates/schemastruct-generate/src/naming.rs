//! Column name to exported Go identifier conversion.

/// Used when a column name contains no usable character.
pub const FALLBACK_FIELD_NAME: &str = "Field";

/// Prepended when the first letter has no upper-case form.
pub const EXPORT_PREFIX: char = 'X';

const DIGIT_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const COMMON_INITIALISMS: &[&str] = &[
    "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID",
    "IP", "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS",
    "TTL", "UDP", "UI", "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML", "XMPP", "XSRF", "XSS",
];

/// Derive an exported Go field name from a raw column name.
///
/// `user_id` becomes `UserID`, `2fa_code` becomes `TwoFaCode`, and
/// `__created_at` becomes `CreatedAt`. The result always starts with an
/// upper-case letter and contains only letters, digits and underscores; `日付`
/// becomes `X日付`.
pub fn field_name(column: &str) -> String {
    let trimmed = column.trim_start_matches(|c: char| !is_letter(c) && !c.is_ascii_digit());
    if trimmed.is_empty() {
        return FALLBACK_FIELD_NAME.to_string();
    }

    let spelled = spell_leading_digit(trimmed);
    let linted = lint(&spelled);

    let mut out = String::with_capacity(linted.len());
    for (idx, c) in linted.chars().enumerate() {
        let valid = if idx == 0 {
            is_letter(c)
        } else {
            is_letter(c) || c.is_ascii_digit()
        };
        if !valid {
            out.push('_');
        } else if idx == 0 {
            out.push(upper(c));
        } else {
            out.push(c);
        }
    }

    // Letters without an upper-case form (CJK, for one) would leave the field
    // unexported.
    if !out.starts_with(char::is_uppercase) {
        out.insert(0, EXPORT_PREFIX);
    }
    out
}

fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

fn is_initialism(word: &str) -> bool {
    COMMON_INITIALISMS.contains(&word)
}

/// Upper-case a single character, keeping it when the mapping is not 1:1.
fn upper(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

fn spell_leading_digit(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next().and_then(|c| c.to_digit(10)) {
        Some(digit) => format!("{}_{}", DIGIT_WORDS[digit as usize], chars.as_str()),
        None => name.to_string(),
    }
}

/// Split on underscores and lower-to-upper transitions, then capitalize each
/// word or upper-case it entirely when it is a common initialism.
fn lint(name: &str) -> String {
    let mut runes: Vec<char> = name.chars().collect();
    if runes.is_empty() || name == "_" {
        return name.to_string();
    }

    if runes.iter().all(|c| c.is_lowercase()) {
        let all_upper = name.to_uppercase();
        if is_initialism(&all_upper) {
            return all_upper;
        }
        runes[0] = upper(runes[0]);
        return runes.into_iter().collect();
    }

    let mut word_start = 0;
    let mut i = 0;
    while i < runes.len() {
        let mut end_of_word = false;
        if i + 1 == runes.len() {
            end_of_word = true;
        } else if runes[i + 1] == '_' {
            end_of_word = true;
            let mut run = 1;
            while i + run + 1 < runes.len() && runes[i + run + 1] == '_' {
                run += 1;
            }
            // One underscore survives between two digits: `v1_2` stays `V1_2`.
            if i + run + 1 < runes.len()
                && runes[i].is_ascii_digit()
                && runes[i + run + 1].is_ascii_digit()
            {
                run -= 1;
            }
            runes.drain(i + 1..i + 1 + run);
        } else if runes[i].is_lowercase() && !runes[i + 1].is_lowercase() {
            end_of_word = true;
        }
        i += 1;
        if !end_of_word {
            continue;
        }

        let word: String = runes[word_start..i].iter().collect();
        let word_upper = word.to_uppercase();
        if is_initialism(&word_upper) {
            runes.splice(word_start..i, word_upper.chars());
        } else if word.to_lowercase() == word {
            runes[word_start] = upper(runes[word_start]);
        }
        word_start = i;
    }

    runes.into_iter().collect()
}
