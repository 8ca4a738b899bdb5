use desifit_rs::models::{Equipment, Focus, Goal};
use desifit_rs::planner::{
    exercise_catalog, generate_weekly_workout, generate_workout_day, sets_reps_scheme,
};

#[test]
fn test_four_day_focus_sequence() {
    let week = generate_weekly_workout(Goal::LoseWeight, 4, Equipment::Gym, 0);
    let focus: Vec<Focus> = week.days.iter().map(|d| d.focus).collect();
    assert_eq!(
        focus,
        vec![
            Focus::FullBody,
            Focus::UpperBody,
            Focus::LowerBody,
            Focus::FullBody
        ]
    );
}

#[test]
fn test_week_metadata() {
    let week = generate_weekly_workout(Goal::GainWeight, 3, Equipment::Home, 1);
    assert_eq!(week.week_index, 1);
    assert_eq!(week.goal, Goal::GainWeight);
    assert_eq!(week.days_per_week, 3);
    assert_eq!(week.equipment, Equipment::Home);
    for (i, day) in week.days.iter().enumerate() {
        assert_eq!(day.day_index, i as u32);
        assert_eq!(day.goal, Goal::GainWeight);
        assert_eq!(day.equipment, Equipment::Home);
    }
}

#[test]
fn test_unrecognized_equipment_uses_home_catalog() {
    let day = generate_workout_day(Goal::Maintain, Equipment::from_label("kettlebell"), 0);
    let home = exercise_catalog(Equipment::Home);
    assert_eq!(day.exercises[0].name, home.full_body[0]);
    assert_eq!(day.exercises[4].name, home.cardio[0]);
}

#[test]
fn test_schemes_follow_goal() {
    for goal in [Goal::LoseWeight, Goal::Maintain, Goal::GainWeight] {
        let scheme = sets_reps_scheme(goal);
        let week = generate_weekly_workout(goal, 3, Equipment::Gym, 0);

        let full = &week.days[0];
        assert!(full.exercises[..4].iter().all(|e| e.scheme == scheme.strength));
        assert_eq!(full.exercises[4].scheme, scheme.cardio);

        let upper = &week.days[1];
        assert_eq!(upper.exercises.last().unwrap().scheme, scheme.accessory);

        let lower = &week.days[2];
        assert_eq!(lower.exercises.last().unwrap().scheme, scheme.cardio);
    }
}

#[test]
fn test_workout_record_shape() {
    let week = generate_weekly_workout(Goal::LoseWeight, 2, Equipment::Gym, 0);
    let json = serde_json::to_value(&week).unwrap();

    assert_eq!(json["goal"], "lose_weight");
    assert_eq!(json["equipment"], "gym");
    assert_eq!(json["days_per_week"], 2);
    assert_eq!(json["days"][1]["focus"], "upper_body");
    assert_eq!(json["days"][1]["exercises"][0]["name"], "Incline dumbbell press");
}
