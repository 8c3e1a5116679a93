use core::fmt::Write;

pub fn nth(n: usize) -> String {
    let mut buf = String::with_capacity(n.checked_ilog10().map_or(1, |x| x + 1) as usize + 2);
    let _ = write!(&mut buf, "{n}");
    if n / 10 % 10 == 1 {
        buf.push_str("th");
    } else {
        match n % 10 {
            1 => buf.push_str("st"),
            2 => buf.push_str("nd"),
            3 => buf.push_str("rd"),
            _ => buf.push_str("th"),
        }
    }
    buf
}

pub fn last_name(s: &str) -> &str {
    s.rsplit_once(' ').map_or(s, |x| x.1)
}

/// Three letter label for a team name, e.g. "Toronto Blue Jays" -> "TBJ", "Cubs" -> "CUB".
pub fn abbreviate(name: &str) -> String {
    let words = name.split_whitespace().collect::<Vec<_>>();
    let abbreviation = if words.len() >= 2 {
        words.iter().filter_map(|word| word.chars().next()).take(3).collect::<String>()
    } else {
        name.trim().chars().take(3).collect::<String>()
    };
    abbreviation.to_uppercase()
}

/// Width in columns of a number printed in base 10.
pub fn digits(n: u32) -> usize {
    n.checked_ilog10().map_or(1, |x| x + 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals() {
        assert_eq!(nth(1), "1st");
        assert_eq!(nth(2), "2nd");
        assert_eq!(nth(3), "3rd");
        assert_eq!(nth(4), "4th");
        assert_eq!(nth(11), "11th");
        assert_eq!(nth(12), "12th");
        assert_eq!(nth(13), "13th");
        assert_eq!(nth(21), "21st");
        assert_eq!(nth(112), "112th");
    }

    #[test]
    fn abbreviations() {
        assert_eq!(abbreviate("Toronto Blue Jays"), "TBJ");
        assert_eq!(abbreviate("Home Team"), "HT");
        assert_eq!(abbreviate("cubs"), "CUB");
        assert_eq!(abbreviate("A"), "A");
    }

    #[test]
    fn last_names() {
        assert_eq!(last_name("Vladimir Guerrero Jr."), "Jr.");
        assert_eq!(last_name("Bo Bichette"), "Bichette");
        assert_eq!(last_name("Ichiro"), "Ichiro");
    }

    #[test]
    fn digit_widths() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(100), 3);
    }
}
