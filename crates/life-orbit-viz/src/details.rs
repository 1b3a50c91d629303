//! Static descriptive text shown when a life area is selected.

use life_orbit_core::NodeId;

/// Copy for the detail overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaDetail {
    pub summary: &'static str,
    pub prompts: &'static [&'static str],
}

const FALLBACK: AreaDetail = AreaDetail {
    summary: "A part of life you chose to keep in orbit.",
    prompts: &[
        "What would a good week here look like?",
        "Who else is part of this area?",
    ],
};

/// Detail copy for the built-in areas; anything else gets a generic card.
pub fn detail_for(id: NodeId) -> AreaDetail {
    match id.0 {
        1 => AreaDetail {
            summary: "Body, sleep and energy. The base every other area draws on.",
            prompts: &[
                "How rested did you feel this week?",
                "What habit would make the biggest difference?",
            ],
        },
        2 => AreaDetail {
            summary: "Work, craft and the people you build things with.",
            prompts: &[
                "Which project gave you energy lately?",
                "What are you learning on the job?",
            ],
        },
        3 => AreaDetail {
            summary: "Partner, family and friends. The closest orbit of all.",
            prompts: &[
                "Who have you not talked to in a while?",
                "Where do you want to show up more?",
            ],
        },
        4 => AreaDetail {
            summary: "Income, savings and the runway that buys you choices.",
            prompts: &["Is your spending aligned with what you value?"],
        },
        5 => AreaDetail {
            summary: "Reading, courses and the skills you are growing into.",
            prompts: &[
                "What did you learn this month?",
                "What would you like to be able to do next year?",
            ],
        },
        6 => AreaDetail {
            summary: "Play, rest and everything done just for the joy of it.",
            prompts: &["When did you last lose track of time?"],
        },
        _ => FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_areas_have_specific_copy() {
        for id in 1..=6 {
            assert_ne!(detail_for(NodeId(id)), FALLBACK);
            assert!(!detail_for(NodeId(id)).prompts.is_empty());
        }
    }

    #[test]
    fn test_unknown_area_falls_back() {
        assert_eq!(detail_for(NodeId(99)), FALLBACK);
    }
}
