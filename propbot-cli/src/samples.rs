//! Built-in props analyzed by `--mode test`, one per supported pattern family.

pub const SAMPLE_PROPS: &[&str] = &[
    "Mike Trout Over 1.5 Hits +120",
    "Patrick Mahomes More 2.5 Passing Touchdowns",
    "LeBron James Under 25.5 Points -110",
    "Connor McDavid Over 0.5 Goals +150",
    "Luis Castillo + Jack Leiter Over 0.5 1st Inning Runs Allowed",
];
