use crate::geometry::RayIntersection;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub rays: usize,
    pub hits: usize,        // all rays with a forward intersection
    pub inside_hits: usize, // hits whose ray started inside the sphere
    pub misses: usize,
}

impl Profile {
    pub fn new(rays: usize, hits: usize, inside_hits: usize, misses: usize) -> Self {
        Profile {
            rays,
            hits,
            inside_hits,
            misses,
        }
    }

    pub fn record(&mut self, intersection: &RayIntersection, started_inside: bool) {
        self.rays += 1;
        if intersection.hit {
            self.hits += 1;
            if started_inside {
                self.inside_hits += 1;
            }
        } else {
            self.misses += 1;
        }
    }

    pub fn combine(&self, other: Self) -> Self {
        Profile::new(
            self.rays + other.rays,
            self.hits + other.hits,
            self.inside_hits + other.inside_hits,
            self.misses + other.misses,
        )
    }

    pub fn pretty_print(&self) {
        let &Profile {
            rays,
            hits,
            inside_hits,
            misses,
        } = self;
        info!(
            "{} rays: {} hits ({} from inside), {} misses",
            rays, hits, inside_hits, misses
        );
        if rays > 0 {
            info!("hit rate {:.1}%", 100.0 * hits as f32 / rays as f32);
        }
    }
}
