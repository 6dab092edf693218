//! Named markdown documents, one per slide archetype. Used as golden inputs
//! for tests, benches and the CLI's `--sample` flag.

pub const SAMPLE_TITLE_SLIDE: &str = "\
# Quarterly Business Review

Q3 2025 results and the plan for next quarter
";

pub const SAMPLE_CARD_GRID_2_COLS: &str = "\
## Our Approach

- **Listen**: understand the problem before writing code
- **Iterate**: ship small increments every week
";

pub const SAMPLE_CARD_GRID_3_COLS: &str = "\
## Core Values

- **Customer first**: every decision starts with the user
- **Own it**: see problems through to the end
- **Stay curious**: question assumptions and keep learning
";

pub const SAMPLE_CARD_GRID_4_COLS: &str = "\
## Platform Features

- **Search**: full-text across every workspace
- **Sync**: offline edits merge automatically
- **Share**: granular links with expiry dates
- **Secure**: encryption at rest and in transit
";

pub const SAMPLE_COMPARISON_SLIDE: &str = "\
## Build vs Buy

### Build

- Full control over the roadmap
- Higher upfront cost
- Longer time to market

### Buy

- Live within weeks
- Vendor lock-in risk
- Predictable subscription fees
";

pub const SAMPLE_TIMELINE_SLIDE: &str = "\
## Project Roadmap

1. **Discovery**: stakeholder interviews and research
2. **Design**: wireframes and a clickable prototype
3. **Build**: two-week sprints with weekly demos
4. **Launch**: staged rollout to all regions
5. **Review**: measure adoption against targets
";

pub const SAMPLE_QUOTE_SLIDE: &str = "\
> The best way to predict the future is to invent it.
>
> — Alan Kay
";

pub const SAMPLE_TABLE_SLIDE: &str = "\
## Pricing

| Plan | Seats | Price |
|:-----------|:---------:|-----------:|
| Starter | 5 | $10 |
| Team | 25 | $45 |
| Enterprise | Unlimited | Contact us |
";

/// Too few and too long items for a card grid; maps to the fallback layout.
pub const SAMPLE_DESCRIPTIVE_LIST: &str = "\
## What We Learned

- Customers who completed onboarding in the first week were three times more likely to still be active after six months
- Support tickets dropped by almost half once the most common questions were answered directly inside the product
- Teams that invited a second member within two days adopted the collaboration features far faster than solo users
- Pricing page visits spiked after every release announcement, but conversions only rose when the changelog explained the benefit
- The mobile app accounted for a growing share of daily sessions even though it still lacks several desktop features
";

pub const SAMPLE_FULL_PRESENTATION: &str = "\
# Product Strategy 2025

Where we are and where we are going

---

## Core Values

- **Customer first**: every decision starts with the user
- **Own it**: see problems through to the end
- **Stay curious**: question assumptions and keep learning

---

## Project Roadmap

1. **Discovery**: stakeholder interviews and research
2. **Design**: wireframes and a clickable prototype
3. **Build**: two-week sprints with weekly demos

---

## Build vs Buy

### Build

- Full control over the roadmap
- Higher upfront cost

### Buy

- Live within weeks
- Vendor lock-in risk

---

> Simplicity is prerequisite for reliability.
>
> — Edsger W. Dijkstra

---

## Pricing

| Plan | Seats | Price |
|------|-------|-------|
| Starter | 5 | $10 |
| Team | 25 | $45 |
";

/// Every sample by name, in archetype order.
pub static SAMPLES: [(&str, &str); 10] = [
    ("title", SAMPLE_TITLE_SLIDE),
    ("card-grid-2", SAMPLE_CARD_GRID_2_COLS),
    ("card-grid-3", SAMPLE_CARD_GRID_3_COLS),
    ("card-grid-4", SAMPLE_CARD_GRID_4_COLS),
    ("comparison", SAMPLE_COMPARISON_SLIDE),
    ("timeline", SAMPLE_TIMELINE_SLIDE),
    ("quote", SAMPLE_QUOTE_SLIDE),
    ("table", SAMPLE_TABLE_SLIDE),
    ("descriptive-list", SAMPLE_DESCRIPTIVE_LIST),
    ("full-presentation", SAMPLE_FULL_PRESENTATION),
];

pub fn all_samples() -> &'static [(&'static str, &'static str)] {
    &SAMPLES
}

pub fn sample(name: &str) -> Option<&'static str> {
    SAMPLES.iter().find(|(n, _)| *n == name).map(|(_, md)| *md)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        assert_eq!(sample("quote"), Some(SAMPLE_QUOTE_SLIDE));
        assert_eq!(sample("nope"), None);
        assert_eq!(all_samples().len(), 10);
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = SAMPLES.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SAMPLES.len());
    }

    #[test]
    fn descriptive_items_are_long() {
        let lines: Vec<_> = SAMPLE_DESCRIPTIVE_LIST
            .lines()
            .filter(|l| l.starts_with("- "))
            .collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.chars().count() > 80));
    }
}
