/// Levenshtein distance between `a` and `b`, counted in chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let n = longer.len();
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for (i, &sc) in shorter.iter().enumerate() {
        curr[0] = i + 1;
        for j in 1..=n {
            let cost = if sc == longer[j - 1] { 0 } else { 1 };
            let ins = curr[j - 1] + 1;
            let del = prev[j] + 1;
            let sub = prev[j - 1] + cost;
            curr[j] = ins.min(del).min(sub);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}
