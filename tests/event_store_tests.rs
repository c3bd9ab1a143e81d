use week_scheduler::{Day, Event, EventStore, IndexError, WeekSchedule};

fn snapshot(store: &EventStore) -> Vec<Event> {
    store.list().cloned().collect()
}

fn hh_mm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

#[test]
fn monday_scenario() {
    let mut week = WeekSchedule::initialize();
    let monday = week.store_for(Day::Monday);
    assert!(monday.is_empty());

    monday.add(Event::new("Standup", "09:00")).unwrap();
    let err = monday.add(Event::new("Review", "09:00")).unwrap_err();
    assert_eq!(err.time, "09:00");
    let rendered: Vec<String> = monday.list().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["Standup at 09:00"]);

    monday.add(Event::new("Lunch", "12:00")).unwrap();
    let rendered: Vec<String> = monday.list().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["Standup at 09:00", "Lunch at 12:00"]);

    let removed = monday.remove(0).unwrap();
    assert_eq!(removed.to_string(), "Standup at 09:00");
    let rendered: Vec<String> = monday.list().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["Lunch at 12:00"]);
}

#[test]
fn any_insertion_order_yields_sorted_unique_list() {
    // Walk the slots with several strides coprime to the slot count so each
    // run inserts every slot exactly once in a different order.
    let slots = 48u32;
    for stride in [1u32, 5, 7, 11, 13, 47] {
        let mut store = EventStore::new();
        for step in 0..slots {
            let minutes = ((step * stride) % slots) * 30;
            store
                .add(Event::new(format!("slot {step}"), hh_mm(minutes)))
                .unwrap();
        }
        let times: Vec<&str> = store.list().map(Event::time).collect();
        assert_eq!(times.len(), slots as usize);
        assert!(times.windows(2).all(|w| w[0] < w[1]), "stride {stride}: {times:?}");
    }
}

#[test]
fn repeated_conflicts_never_change_the_store() {
    let mut store = EventStore::new();
    for (title, time) in [("A", "08:00"), ("B", "10:00"), ("C", "13:00")] {
        store.add(Event::new(title, time)).unwrap();
    }
    let before = snapshot(&store);
    for time in ["08:00", "10:00", "13:00", "10:00"] {
        assert!(store.add(Event::new("Intruder", time)).is_err());
        assert_eq!(snapshot(&store), before);
    }
}

#[test]
fn remove_deletes_only_the_indexed_event() {
    let times = ["07:00", "08:30", "11:00", "16:45", "20:00"];
    for target in 0..times.len() {
        let mut store = EventStore::new();
        for time in times {
            store.add(Event::new(format!("at {time}"), time)).unwrap();
        }
        let mut expected = snapshot(&store);
        let removed = store.remove(target).unwrap();
        assert_eq!(removed, expected.remove(target));
        assert_eq!(snapshot(&store), expected);
    }
}

#[test]
fn remove_out_of_bounds_is_a_no_op() {
    let mut store = EventStore::new();
    assert_eq!(
        store.remove(0),
        Err(IndexError {
            position: 0,
            len: 0
        })
    );

    store.add(Event::new("Only", "09:00")).unwrap();
    let before = snapshot(&store);
    assert!(store.remove(1).is_err());
    assert!(store.remove(usize::MAX).is_err());
    assert_eq!(snapshot(&store), before);
}

#[test]
fn add_then_remove_restores_previous_sequence() {
    let mut store = EventStore::new();
    for (title, time) in [("Gym", "06:30"), ("Standup", "09:00"), ("Dinner", "19:00")] {
        store.add(Event::new(title, time)).unwrap();
    }
    let before = snapshot(&store);

    let event = Event::new("Dentist", "14:15");
    store.add(event.clone()).unwrap();
    let position = store.position_of(event.time()).unwrap();
    assert_eq!(position, 2);
    assert_eq!(store.remove(position).unwrap(), event);
    assert_eq!(snapshot(&store), before);
}

#[test]
fn time_tokens_compare_as_text() {
    // Tokens are opaque; callers must zero-pad for chronological order.
    let mut store = EventStore::new();
    store.add(Event::new("Late", "10:00")).unwrap();
    store.add(Event::new("Early", "9:00")).unwrap();
    let titles: Vec<&str> = store.list().map(Event::title).collect();
    assert_eq!(titles, vec!["Late", "Early"]);
}
