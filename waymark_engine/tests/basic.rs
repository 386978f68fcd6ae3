use waymark_engine as we;

#[test]
fn test_lib_version() {
    assert!(!we::WAYMARK_VERSION.is_empty());
}

#[test]
fn test_zone_contains_boundary() {
    use we::{WorldPoint, Zone};
    let zone = Zone::new(WorldPoint::new(10, 10, 0), WorldPoint::new(20, 20, 0));
    assert!(zone.contains(WorldPoint::new(10, 20, 0)));
    assert!(!zone.contains(WorldPoint::new(10, 20, 1)));
}

#[test]
fn test_logic_type_identities() {
    use we::LogicType;
    assert!(LogicType::And.apply(std::iter::empty()));
    assert!(!LogicType::Or.apply(std::iter::empty()));
    assert!(LogicType::Nor.apply(std::iter::empty()));
}

#[test]
fn test_empty_state_fails_closed() {
    use we::requirement::{ChatMessageRequirement, Requirement};
    let state = we::GameState::new_empty();
    let req = Requirement::ChatMessage(ChatMessageRequirement { text: "hello".into() });
    assert!(!req.check(&state));
}

#[test]
fn test_skill_requirement_boosted_pass() {
    use we::state::SkillLevel;
    let mut state = we::GameState::new_empty();
    state.skills.insert(we::Skill::Fishing, SkillLevel { base: 50, boosted: 65 });
    assert!(we::SkillRequirement::new(we::Skill::Fishing, 60).boostable().check(&state));
}

#[test]
fn test_conditions_into_requirement() {
    use we::{Conditions, Requirement};
    let state = we::GameState::new_empty();
    let req: Requirement = Conditions::all(Vec::new()).into();
    assert!(req.check(&state));
}

#[test]
fn test_quest_missing_counter_reads_zero() {
    use we::{Quest, Step, VarKind, VarRef};
    let mut quest = Quest::new(
        "Q",
        VarRef {
            kind: VarKind::Varbit,
            id: 42,
        },
        5,
    );
    quest.set_step(0, Step::new("start"));
    let state = we::GameState::new_empty();
    assert_eq!(quest.progress(&state), 0);
    assert!(!quest.is_complete(&state));
}

#[test]
fn test_config_default_colors() {
    use we::requirement::ColorHint;
    let config = we::Config::default();
    assert_eq!(config.color_for(ColorHint::Met), config.pass_color);
    assert!(!config.stew_boosts);
}

#[test]
fn test_style_step() {
    use we::style::GuideStyle;
    colored::control::set_override(true);
    let styled = "hi".step_style();
    assert!(styled.to_string().contains('\u{1b}'));
}

#[test]
fn test_skill_serde_roundtrip() {
    let skill = we::Skill::Woodcutting;
    let s = serde_json::to_string(&skill).unwrap();
    let back: we::Skill = serde_json::from_str(&s).unwrap();
    assert_eq!(skill, back);
}

#[test]
fn test_operation_symbols() {
    use we::Operation;
    assert_eq!(Operation::GreaterEqual.symbol(), ">=");
    assert!(Operation::LessEqual.apply(3, 3));
    assert!(!Operation::NotEqual.apply(3, 3));
}

#[test]
fn test_validate_quest_flags_empty_table() {
    use waymark_data::{QuestDef, validate_quest};
    let def = QuestDef {
        name: "Empty".into(),
        ..QuestDef::default()
    };
    assert!(!validate_quest(&def).is_empty());
}

#[test]
fn test_item_requirement_display() {
    let req = we::ItemRequirement::new("Trout", 333).with_quantity(10);
    assert_eq!(req.display_text(), "Trout x10");
}

#[test]
fn test_resolution_accessors() {
    use we::{GameState, Resolution, Step, StepNode};
    let node: StepNode = Step::new("only").into();
    let state = GameState::new_empty();
    let resolution = node.resolve(&state);
    assert!(!resolution.is_complete());
    assert_eq!(resolution.step().unwrap().text, "only");
    assert!(Resolution::Complete.step().is_none());
}
