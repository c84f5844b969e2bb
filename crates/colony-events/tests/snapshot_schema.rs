//! Snapshot schema tests against the JSON fixture consumers are built on.

use colony_events::{ColonySnapshot, ForagerState, TickSummary};

const SAMPLE: &str = include_str!("fixtures/sample_snapshot.json");

fn sample() -> ColonySnapshot {
    serde_json::from_str(SAMPLE).unwrap()
}

#[test]
fn test_fixture_metrics_agree_with_grids() {
    let snapshot = sample();

    let pheromone: f64 = snapshot.pheromone.cells.iter().sum();
    let food: u64 = snapshot.food.cells.iter().map(|c| *c as u64).sum();

    assert_eq!(snapshot.metrics.total_pheromone, pheromone);
    assert_eq!(snapshot.metrics.remaining_food, food);
    assert_eq!(snapshot.metrics.carrying_count as usize, snapshot.carrying_agents().count());
}

#[test]
fn test_fixture_grids_are_row_major() {
    let snapshot = sample();

    for grid_len in [
        snapshot.pheromone.cells.len(),
        snapshot.food.cells.len(),
        snapshot.nest.cells.len(),
    ] {
        assert_eq!(grid_len, 12);
    }
    assert_eq!(snapshot.food.get(3, 0), Some(2));
    assert_eq!(snapshot.food.get(3, 1), Some(1));
    assert_eq!(snapshot.pheromone.get(0, 2), Some(57.0));
    assert_eq!(snapshot.food.get(4, 0), None);
}

#[test]
fn test_agent_state_matches_carrying_flag() {
    for agent in sample().agents {
        assert_eq!(agent.state, ForagerState::from_carrying(agent.carrying));
    }
}

#[test]
fn test_tick_summary_lines_parse_independently() {
    let lines = [
        r#"{"tick":50,"actions":{"deliver":1,"return_to_nest":4,"pickup":2,"follow_trail":10,"search":108},"total_pheromone":1234.5,"remaining_food":230,"food_delivered":6}"#,
        r#"{"tick":100,"actions":{"deliver":0,"return_to_nest":9,"pickup":1,"follow_trail":30,"search":85},"total_pheromone":2210.0,"remaining_food":221,"food_delivered":13}"#,
    ];

    let summaries: Vec<TickSummary> = lines
        .iter()
        .map(|line| TickSummary::from_jsonl(line).unwrap())
        .collect();

    assert_eq!(summaries[0].actions.total(), 125);
    assert_eq!(summaries[1].actions.total(), 125);
    assert!(summaries[1].tick > summaries[0].tick);
}
