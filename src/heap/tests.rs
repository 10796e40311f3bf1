use super::*;
use crate::test_helpers::test_rng;
use crate::Reversed;
use rand::seq::SliceRandom;
use rand::Rng;

fn assert_heap_property<T: fmt::Debug, L: Less<T>>(heap: &Heap<T, L>) {
    let data = heap.as_slice();
    for child in 1..data.len() {
        let parent = (child - 1) / 2;
        assert!(
            !heap.less().less(&data[child], &data[parent]),
            "child {child} precedes parent {parent} in {data:?}"
        );
    }
}

#[test]
fn test_natural_order_top_and_pop() {
    let mut heap = Heap::new();
    for x in [5, 3, 8, 1, 9, 2] {
        heap.push(x);
        assert_heap_property(&heap);
    }
    assert_eq!(*heap.top(), 1);
    assert_eq!(heap.pop(), Some(1));
    assert_eq!(*heap.top(), 2);
    assert_eq!(heap.len(), 5);
}

#[test]
fn test_custom_predicate() {
    let mut heap: Heap<i32, _> = Heap::with_comparator(Some(|a: &i32, b: &i32| a > b)).unwrap();
    for x in [3, 1, 4, 1, 5] {
        heap.push(x);
    }
    assert_eq!(*heap.top(), 5);
    heap.pop();
    assert_eq!(*heap.top(), 4);
}

#[test]
fn test_missing_comparator() {
    let heap = Heap::<i32, fn(&i32, &i32) -> bool>::with_comparator(None);
    match heap {
        Err(Error::InvalidArgument(msg)) => assert!(msg.contains("less")),
        Ok(_) => panic!("heap built without a predicate"),
    }

    let heap = Heap::<i32, OrdLess<i32>>::with_comparator_and_capacity(None, 16);
    assert!(heap.is_err());
}

#[test]
fn test_error_display() {
    let err = Heap::<u8, OrdLess<u8>>::with_comparator(None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid argument: less function is required to define heap ordering"
    );
}

#[test]
#[should_panic(expected = "cannot retrieve top element from an empty heap")]
fn test_top_empty_panics() {
    let heap: Heap<i32> = Heap::new();
    let _ = heap.top();
}

#[test]
#[should_panic(expected = "cannot retrieve top element from an empty heap")]
fn test_top_after_drain_panics() {
    let mut heap = Heap::from([1, 2]);
    heap.pop();
    heap.pop();
    let _ = heap.top();
}

#[test]
fn test_pop_empty_is_noop() {
    let mut heap: Heap<i32> = Heap::new();
    for _ in 0..3 {
        assert_eq!(heap.pop(), None);
        assert_eq!(heap.len(), 0);
        assert!(heap.is_empty());
    }

    heap.push(7);
    assert_eq!(heap.pop(), Some(7));
    assert_eq!(heap.pop(), None);
    assert!(heap.is_empty());
}

#[test]
fn test_peek() {
    let mut heap = Heap::new();
    assert_eq!(heap.peek(), None);
    heap.push(4);
    heap.push(2);
    assert_eq!(heap.peek(), Some(&2));
    assert_eq!(heap.peek(), Some(heap.top()));
}

#[test]
fn test_round_trip() {
    let mut heap = Heap::new();
    assert!(heap.is_empty());
    heap.push(10);
    assert!(!heap.is_empty());
    for x in 0..10 {
        heap.push(x);
    }
    for _ in 0..11 {
        heap.pop();
    }
    assert!(heap.is_empty());
}

#[test]
fn test_sorted_extraction() {
    let mut rng = test_rng();
    let mut values: Vec<u32> = (0..500).collect();
    values.shuffle(&mut rng);

    let mut heap = Heap::new();
    for &v in &values {
        heap.push(v);
    }
    assert_heap_property(&heap);

    let mut out = Vec::new();
    while !heap.is_empty() {
        out.push(*heap.top());
        heap.pop();
    }
    assert_eq!(out, (0..500).collect::<Vec<_>>());
}

#[test]
fn test_random_operations_keep_invariants() {
    let mut rng = test_rng();
    let mut heap = Heap::new();
    let mut model: Vec<i32> = Vec::new();
    let mut pushes = 0;
    let mut effective_pops = 0;

    for _ in 0..2000 {
        if rng.gen_bool(0.6) {
            let x = rng.gen_range(-50..50);
            heap.push(x);
            model.push(x);
            pushes += 1;
        } else {
            if !heap.is_empty() {
                effective_pops += 1;
            }
            let popped = heap.pop();
            model.sort_unstable_by(|a, b| b.cmp(a));
            assert_eq!(popped, model.pop());
        }
        assert_heap_property(&heap);
        assert_eq!(heap.len(), pushes - effective_pops);
    }
}

#[test]
fn test_sift_down_prefers_better_child() {
    // right child wins only when it precedes the left one
    let mut heap = Heap::new();
    heap.extend([1, 2, 3, 9]);
    heap.pop();
    assert_eq!(heap.as_slice(), [2, 9, 3]);

    let mut heap = Heap::new();
    heap.extend([1, 3, 2, 9]);
    heap.pop();
    assert_eq!(heap.as_slice(), [2, 3, 9]);
}

#[test]
fn test_equal_priorities_not_swapped() {
    let by_key = |a: &(u8, char), b: &(u8, char)| a.0 < b.0;
    let mut heap: Heap<(u8, char), _> = Heap::with_comparator(Some(by_key)).unwrap();
    heap.push((1, 'a'));
    heap.push((1, 'b'));
    heap.push((1, 'c'));
    assert_eq!(heap.as_slice(), [(1, 'a'), (1, 'b'), (1, 'c')]);

    heap.push((0, 'z'));
    assert_eq!(heap.top(), &(0, 'z'));
    assert_heap_property(&heap);
}

#[test]
fn test_non_copy_elements() {
    let by_len = |a: &String, b: &String| a.len() < b.len();
    let mut heap: Heap<String, _> = Heap::with_comparator(Some(by_len)).unwrap();
    for word in ["banana", "fig", "apple", "kiwi"] {
        heap.push(word.to_string());
    }
    assert_eq!(heap.pop().as_deref(), Some("fig"));
    assert_eq!(heap.pop().as_deref(), Some("kiwi"));
    assert_eq!(heap.len(), 2);
}

#[test]
fn test_reversed() {
    let mut heap: Heap<i32, _> = Heap::with_comparator(Some(Reversed(OrdLess::new()))).unwrap();
    heap.extend(&[3, 1, 4, 1, 5]);
    assert_heap_property(&heap);
    assert_eq!(heap.into_sorted_vec(), [5, 4, 3, 1, 1]);
}

#[test]
fn test_into_sorted_vec() {
    let mut rng = test_rng();
    let values: Vec<i64> = (0..200).map(|_| rng.gen_range(-1000..1000)).collect();
    let heap: Heap<i64> = values.iter().copied().collect();
    assert_eq!(heap.len(), values.len());

    let mut expected = values;
    expected.sort();
    assert_eq!(heap.into_sorted_vec(), expected);
}

#[test]
fn test_default_and_from_iter() {
    let mut heap: Heap<u8> = Heap::default();
    assert!(heap.is_empty());
    heap.extend(vec![4, 2, 6]);
    assert_eq!(heap.peek(), Some(&2));

    let heap: Heap<u8> = [9, 7, 8].into_iter().collect();
    assert_eq!(*heap.top(), 7);
}

#[test]
fn test_iterators() {
    let heap = Heap::from([4, 1, 3, 2]);
    assert_eq!(heap.iter().len(), 4);

    let mut borrowed: Vec<_> = (&heap).into_iter().copied().collect();
    borrowed.sort();
    assert_eq!(borrowed, [1, 2, 3, 4]);

    let mut owned: Vec<_> = heap.clone().into_iter().collect();
    owned.sort();
    assert_eq!(owned, [1, 2, 3, 4]);

    let mut storage = heap.into_vec();
    storage.sort();
    assert_eq!(storage, [1, 2, 3, 4]);
}

#[test]
fn test_drain_and_clear() {
    let mut heap = Heap::from([5, 6, 7]);
    let mut drained: Vec<_> = heap.drain().collect();
    drained.sort();
    assert_eq!(drained, [5, 6, 7]);
    assert!(heap.is_empty());

    heap.push(1);
    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.pop(), None);
}

#[test]
fn test_clone_is_independent() {
    let mut a = Heap::from([3, 1, 2]);
    let b = a.clone();
    a.pop();
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 3);
    assert_eq!(*b.top(), 1);

    let mut c = Heap::new();
    c.clone_from(&b);
    assert_eq!(c.into_sorted_vec(), [1, 2, 3]);
}

#[test]
fn test_capacity() {
    let mut heap: Heap<i32> = Heap::with_capacity(32);
    assert!(heap.capacity() >= 32);
    for x in 0..64 {
        heap.push(x);
    }
    assert_eq!(heap.len(), 64);

    heap.clear();
    heap.shrink_to_fit();
    heap.reserve(8);
    assert!(heap.capacity() >= 8);
}

#[test]
fn test_debug() {
    let heap = Heap::from([2, 1]);
    assert_eq!(format!("{heap:?}"), "[1, 2]");
    assert_eq!(format!("{:?}", heap.iter()), "Iter([1, 2])");
}
