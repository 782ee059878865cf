use orx_concurrent_collections::*;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use test_case::test_case;

enum ArrayAction {
    /// Appends the string to the array.
    Append(String),
    /// Extends the array with the elements of the vector.
    Extend(Vec<String>),
    /// Maps the string at the given index to its length.
    Map(usize),
    /// Clones the string at the given index.
    Get(usize),
    /// Replaces the element at the given index with the new string.
    Replace(usize, String),
    /// Sets the element at the given index to the new string.
    Set(usize, String),
    /// Updates the element at the given index by appending the given character,
    /// or truncating it to a single digit once it is long.
    Update(usize, char),
    /// Removes the element at the given index.
    Remove(usize),
    /// Takes a snapshot, maps the elements to numbers and sums them.
    IterMapReduce,
}

impl ArrayAction {
    fn new(r: &mut ChaCha8Rng, len: usize) -> Self {
        let idx = |r: &mut ChaCha8Rng| r.random_range(0..len);
        let str = |r: &mut ChaCha8Rng| r.random_range(0..1000).to_string();

        if len == 0 {
            return ArrayAction::Append(str(r));
        }

        match r.random_range(0..20) {
            0..=4 => ArrayAction::Append(str(r)),
            5 => ArrayAction::Extend((0..16).map(|_| str(r)).collect()),
            6 | 7 => ArrayAction::Map(idx(r)),
            8 | 9 => ArrayAction::Get(idx(r)),
            10 | 11 => ArrayAction::Replace(idx(r), str(r)),
            12 | 13 => ArrayAction::Set(idx(r), str(r)),
            14 | 15 => ArrayAction::Update(idx(r), '7'),
            16 | 17 => ArrayAction::Remove(idx(r)),
            _ => ArrayAction::IterMapReduce,
        }
    }
}

/// Concurrent removals might shrink the array between choosing an index and using it.
fn assert_in_bounds_or_out_of_range<U>(result: Result<U, ArrayError>) {
    match result {
        Ok(_) | Err(ArrayError::OutOfRange { .. }) => {}
        Err(e) => panic!("unexpected error: {}", e),
    }
}

fn apply_random_array_actions(array: &ConcurrentGrowableArray<String>, final_len: usize, mut r: ChaCha8Rng) {
    while array.len() < final_len {
        match ArrayAction::new(&mut r, array.len()) {
            ArrayAction::Append(value) => {
                array.append(value);
            }
            ArrayAction::Extend(values) => {
                array.extend(values);
            }
            ArrayAction::Map(i) => {
                assert_in_bounds_or_out_of_range(array.map(i, |x| x.len()));
            }
            ArrayAction::Get(i) => {
                if let Ok(Some(value)) = array.get(i) {
                    assert!(value.parse::<usize>().is_ok());
                }
            }
            ArrayAction::Replace(i, value) => {
                if let Ok(old_value) = array.replace(i, value) {
                    assert!(old_value.parse::<usize>().is_ok());
                }
            }
            ArrayAction::Set(i, value) => {
                assert_in_bounds_or_out_of_range(array.set(i, value));
            }
            ArrayAction::Update(i, c) => {
                assert_in_bounds_or_out_of_range(array.update(i, |x| match x.len() {
                    0..8 => x.push(c),
                    _ => x.truncate(1),
                }));
            }
            ArrayAction::Remove(i) => {
                assert_in_bounds_or_out_of_range(array.remove(i));
            }
            ArrayAction::IterMapReduce => {
                let _sum: usize = array.iter().map(|x| x.parse::<usize>().unwrap()).sum();
            }
        }
    }
}

#[test_case(1, 500)]
#[test_case(4, 1000)]
#[test_case(8, 2000)]
fn random_array_actions(num_threads: usize, final_len: usize) {
    let array = ConcurrentGrowableArray::new();

    std::thread::scope(|s| {
        let array = &array;
        for i in 0..num_threads {
            s.spawn(move || {
                apply_random_array_actions(array, final_len, ChaCha8Rng::seed_from_u64((i * 42) as u64))
            });
        }
    });

    assert!(array.len() >= final_len);
    assert_eq!(array.len(), array.len_committed());
    assert!(array.capacity() >= array.len());

    let values = array.clone_to_vec();
    assert_eq!(values.len(), array.len());
    assert!(values.iter().all(|x| x.parse::<usize>().is_ok()));
}

enum SetAction {
    Add(u32),
    Remove(u32),
    Contains(u32),
    Iter,
}

impl SetAction {
    fn new(r: &mut ChaCha8Rng, num_keys: u32) -> Self {
        let key = r.random_range(0..num_keys);
        match r.random_range(0..10) {
            0..=3 => SetAction::Add(key),
            4..=6 => SetAction::Remove(key),
            7 | 8 => SetAction::Contains(key),
            _ => SetAction::Iter,
        }
    }
}

#[test_case(1, 64)]
#[test_case(4, 64)]
#[test_case(8, 512)]
fn random_set_actions(num_threads: usize, num_keys: u32) {
    let set = ConcurrentOrderedSet::new();

    std::thread::scope(|s| {
        let set = &set;
        for i in 0..num_threads {
            s.spawn(move || {
                let mut r = ChaCha8Rng::seed_from_u64((i * 42) as u64);
                for _ in 0..2000 {
                    match SetAction::new(&mut r, num_keys) {
                        SetAction::Add(x) => {
                            set.add(x);
                        }
                        SetAction::Remove(x) => {
                            set.remove(&x);
                        }
                        SetAction::Contains(x) => {
                            set.contains(&x);
                        }
                        SetAction::Iter => {
                            let elements: Vec<_> = set.iter().collect();
                            assert!(elements.iter().all(|x| *x < num_keys));
                        }
                    }
                }
            });
        }
    });

    let elements = set.to_vec();
    assert_eq!(elements.len(), set.len());
    for x in 0..num_keys {
        assert_eq!(set.contains(&x), elements.contains(&x));
    }
}
