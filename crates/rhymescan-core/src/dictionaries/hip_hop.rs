//! Hand-curated hip-hop rhyme groups.
//!
//! Words in the same group are treated as rhyming in rap delivery even when
//! their spelling or standard pronunciation says otherwise ("block" and
//! "photoshop"). Groups can be replaced or extended from configuration.

/// Built-in groups: `(name, members)`.
pub const HIP_HOP_GROUPS: &[(&str, &[&str])] = &[
    (
        "ot_group",
        &[
            "plot", "cop", "block", "photoshop", "hot", "shot", "lot", "spot", "got", "not",
            "top", "stop", "drop", "pop", "hiphop", "clock", "rock", "knock",
        ],
    ),
    (
        "ay_group",
        &[
            "day", "way", "play", "stay", "pay", "say", "okay", "display", "today", "away",
            "spray", "weigh", "they",
        ],
    ),
    (
        "ame_group",
        &["game", "fame", "name", "same", "flame", "claim", "aim", "blame", "frame", "shame"],
    ),
    (
        "ight_group",
        &["night", "light", "fight", "right", "sight", "bright", "tight", "mic", "write", "bite"],
    ),
    (
        "ow_group",
        &["flow", "show", "know", "go", "dough", "pro", "slow", "though", "glow", "throw"],
    ),
    (
        "eal_group",
        &["real", "deal", "feel", "steal", "meal", "heal", "wheel", "steel", "seal", "kneel"],
    ),
    (
        "ee_group",
        &["me", "free", "see", "be", "degree", "key", "three", "tree", "emcee", "mc"],
    ),
    (
        "oo_group",
        &["crew", "true", "through", "you", "do", "new", "who", "too", "blue", "view"],
    ),
    (
        "ain_group",
        &["pain", "rain", "gain", "chain", "brain", "main", "champagne", "lane", "game", "insane"],
    ),
    (
        "ack_group",
        &["back", "track", "black", "stack", "attack", "pack", "crack", "rap", "jack", "smack"],
    ),
    (
        "ash_group",
        &["cash", "flash", "stash", "smash", "crash", "dash", "clash", "bash", "trash", "rash"],
    ),
    (
        "ard_group",
        &["hard", "card", "guard", "yard", "barred", "scarred", "regard", "bodyguard"],
    ),
    (
        "ive_group",
        &["live", "alive", "drive", "five", "hive", "thrive", "survive", "arrive", "vibe", "tribe"],
    ),
    (
        "ead_group",
        &["head", "dead", "bread", "said", "red", "spread", "thread", "instead", "bed", "led"],
    ),
];
