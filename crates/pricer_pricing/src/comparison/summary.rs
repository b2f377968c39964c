//! Fixed-format text report of a [`PricingResult`].

use std::fmt::{self, Write};

use super::result::PricingResult;

const RULE_WIDTH: usize = 60;

/// Renders the multi-line summary printed by command-line front ends.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::comparison::{price_option, render_summary, PricingDefaults, PricingRequest};
///
/// let request = PricingRequest { num_simulations: Some(1_000), num_steps: Some(12), ..Default::default() };
/// let result = price_option(&request, &PricingDefaults::default()).unwrap();
/// let text = render_summary(&result);
///
/// assert!(text.contains("Monte Carlo Options Pricing Results"));
/// assert!(text.contains("Number of Simulations: 1,000"));
/// ```
pub fn render_summary(result: &PricingResult) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_summary(&mut out, result);
    out
}

fn write_summary<W: Write>(out: &mut W, r: &PricingResult) -> fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);
    let option_type = r.option_type();
    let seed = match r.random_seed() {
        Some(seed) => seed.to_string(),
        None => "none (entropy)".to_string(),
    };
    let pct = if r.percentage_difference_defined() {
        format!("{:.2}%", r.percentage_difference())
    } else {
        "n/a (analytical price is zero)".to_string()
    };

    writeln!(out, "{}", rule)?;
    writeln!(out, "Monte Carlo Options Pricing Results")?;
    writeln!(out, "{}", rule)?;
    writeln!(out)?;
    writeln!(out, "Option Parameters:")?;
    writeln!(out, "  Type:                  {}", option_type.as_str().to_uppercase())?;
    writeln!(out, "  Spot Price (S0):       ${:.2}", r.spot_price())?;
    writeln!(out, "  Strike Price (K):      ${:.2}", r.strike_price())?;
    writeln!(out, "  Time to Expiration:    {:.2} years", r.time_to_expiration())?;
    writeln!(out, "  Risk-Free Rate:        {:.2}%", r.risk_free_rate() * 100.0)?;
    writeln!(out, "  Volatility (σ):        {:.2}%", r.volatility() * 100.0)?;
    writeln!(out)?;
    writeln!(out, "Simulation Parameters:")?;
    writeln!(out, "  Number of Simulations: {}", group_thousands(r.num_simulations()))?;
    writeln!(out, "  Time Steps per Path:   {}", group_thousands(r.num_steps()))?;
    writeln!(out, "  Random Seed:           {}", seed)?;
    writeln!(out)?;
    writeln!(out, "Monte Carlo Results:")?;
    writeln!(out, "  Estimated Price:       ${:.4}", r.mc_price())?;
    writeln!(out, "  Standard Error:        ${:.4}", r.mc_std_error())?;
    writeln!(
        out,
        "  95% Confidence Interval: [${:.4}, ${:.4}]",
        r.mc_ci_lower(),
        r.mc_ci_upper()
    )?;
    writeln!(out)?;
    writeln!(out, "Black-Scholes Results:")?;
    writeln!(out, "  Theoretical Price:     ${:.4}", r.bs_price())?;
    writeln!(out)?;
    writeln!(out, "Comparison:")?;
    writeln!(out, "  Absolute Difference:   ${:.4}", r.absolute_difference())?;
    writeln!(out, "  Percentage Difference: {}", pct)?;
    writeln!(out, "  Agreement:             {}", r.agreement())?;
    writeln!(out)?;
    writeln!(out, "Interpretation:")?;
    writeln!(
        out,
        "  The Monte Carlo simulation estimates the {} option price",
        option_type
    )?;
    if r.percentage_difference_defined() {
        writeln!(
            out,
            "  at ${:.4}, which differs from the Black-Scholes theoretical",
            r.mc_price()
        )?;
        writeln!(out, "  price by {:.2}%. This difference is due to", r.percentage_difference())?;
    } else {
        writeln!(
            out,
            "  at ${:.4}, against a Black-Scholes theoretical price of zero",
            r.mc_price()
        )?;
        writeln!(out, "  (absolute difference ${:.4}). Any difference is due to", r.absolute_difference())?;
    }
    writeln!(out, "  Monte Carlo sampling error and typically decreases with more simulations.")?;
    writeln!(out, "  {}", r.agreement().advice())?;
    writeln!(out)?;
    write!(out, "{}", rule)
}

impl fmt::Display for PricingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(f, self)
    }
}

/// `1234567` → `"1,234,567"`
pub fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
