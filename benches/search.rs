use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use costar_degrees::search::ShortestPathQuery;
use costar_degrees::store::{EntityStore, Movie, MovieId, Person, PersonId};
use std::collections::HashSet;

// Chain of `len` people where consecutive pairs share one movie, plus
// `extras` additional cast members per movie for realistic fan-out.
fn chain_store(len: usize, extras: usize) -> EntityStore {
    let mut store = EntityStore::new();
    for i in 0..len {
        store.insert_person(Person {
            id: PersonId(format!("p{i}")),
            name: format!("Person {i}"),
            birth: None,
            credits: HashSet::new(),
        });
    }
    for i in 0..len.saturating_sub(1) {
        let movie = MovieId(format!("m{i}"));
        store.insert_movie(Movie {
            id: movie.clone(),
            title: format!("Movie {i}"),
            year: None,
            cast: HashSet::new(),
        });
        store.link(&PersonId(format!("p{i}")), &movie);
        store.link(&PersonId(format!("p{}", i + 1)), &movie);
        for j in 0..extras {
            let extra = PersonId(format!("x{i}_{j}"));
            store.insert_person(Person {
                id: extra.clone(),
                name: format!("Extra {i} {j}"),
                birth: None,
                credits: HashSet::new(),
            });
            store.link(&extra, &movie);
        }
    }
    store
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for len in [10usize, 100, 1000] {
        let store = chain_store(len, 3);
        let source = PersonId("p0".to_string());
        let target = PersonId(format!("p{}", len - 1));

        group.bench_function(BenchmarkId::new("shortest_path_chain", len), |b| {
            b.iter(|| {
                let q = ShortestPathQuery::new(source.clone(), target.clone());
                let res = q.run(black_box(&store)).expect("valid endpoints");
                black_box(res.map(|p| p.len()))
            })
        });
    }

    // Exhaustive miss: the target exists but shares no credits.
    let mut store = chain_store(200, 3);
    store.insert_person(Person {
        id: PersonId("isolated".to_string()),
        name: "Isolated".to_string(),
        birth: None,
        credits: HashSet::new(),
    });
    group.bench_function(BenchmarkId::new("shortest_path_chain", "not_connected"), |b| {
        b.iter(|| {
            let q = ShortestPathQuery::new(
                PersonId("p0".to_string()),
                PersonId("isolated".to_string()),
            );
            let res = q.run(black_box(&store)).expect("valid endpoints");
            black_box(res.is_none())
        })
    });

    group.finish();
}

criterion_group!(name = benches; config = Criterion::default(); targets = bench_search);
criterion_main!(benches);
