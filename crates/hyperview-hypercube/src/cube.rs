//! Vertices and connectivity of the n-cube. Both depend on the dimension only.

/// Unordered vertex pair, stored with `a < b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b { Self { a, b } } else { Self { a: b, b: a } }
    }

    /// Axis the edge runs along (the single differing bit).
    #[inline]
    pub fn axis(&self) -> usize {
        (self.a ^ self.b).trailing_zeros() as usize
    }
}

/// `2^dimension` points with `dimension` coordinates each, stored flat.
#[derive(Clone, Debug, PartialEq)]
pub struct VertexSet {
    dimension: usize,
    coords: Vec<f64>,
    count: usize,
}

impl VertexSet {
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn vertex(&self, index: usize) -> &[f64] {
        let start = index * self.dimension;
        &self.coords[start..start + self.dimension]
    }

    #[inline]
    pub(crate) fn vertex_mut(&mut self, index: usize) -> &mut [f64] {
        let start = index * self.dimension;
        &mut self.coords[start..start + self.dimension]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.count).map(move |i| self.vertex(i))
    }
}

/// Vertex `i` has coordinate `d` equal to +1 when bit `d` of `i` is set, else -1.
pub fn generate_vertices(dimension: usize) -> VertexSet {
    let count = 1usize << dimension;
    let mut coords = Vec::with_capacity(count * dimension);
    for i in 0..count {
        for d in 0..dimension {
            coords.push(if i & (1 << d) != 0 { 1.0 } else { -1.0 });
        }
    }
    VertexSet {
        dimension,
        coords,
        count,
    }
}

/// All pairs `i < j` at Hamming distance 1, ordered by `i` then `j`.
///
/// Yields `dimension * 2^(dimension-1)` edges. Built by flipping each zero bit of `i`
/// rather than testing every pair, which gives the same set in the same order.
pub fn edges(dimension: usize) -> Vec<Edge> {
    let count = 1usize << dimension;
    let mut out = Vec::with_capacity(dimension * (count >> 1));
    for i in 0..count {
        // Ascending j means ascending flipped bit among the zero bits of i.
        for d in 0..dimension {
            let bit = 1usize << d;
            if i & bit == 0 {
                out.push(Edge { a: i, b: i | bit });
            }
        }
    }
    out
}

#[inline]
pub fn hamming_distance(a: usize, b: usize) -> u32 {
    (a ^ b).count_ones()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimension_is_single_empty_vertex() {
        let v = generate_vertices(0);
        assert_eq!(v.len(), 1);
        assert!(v.vertex(0).is_empty());
        assert!(edges(0).is_empty());
    }

    #[test]
    fn square_vertices_follow_bit_order() {
        let v = generate_vertices(2);
        let got: Vec<&[f64]> = v.iter().collect();
        assert_eq!(
            got,
            vec![
                &[-1.0, -1.0][..],
                &[1.0, -1.0][..],
                &[-1.0, 1.0][..],
                &[1.0, 1.0][..]
            ]
        );
    }

    #[test]
    fn edges_match_pairwise_scan() {
        for d in 0..=6 {
            let n = 1usize << d;
            let mut brute = Vec::new();
            for i in 0..n {
                for j in (i + 1)..n {
                    if hamming_distance(i, j) == 1 {
                        brute.push(Edge { a: i, b: j });
                    }
                }
            }
            assert_eq!(edges(d), brute, "dimension {d}");
        }
    }

    #[test]
    fn edge_new_orders_endpoints() {
        let e = Edge::new(5, 4);
        assert_eq!((e.a, e.b), (4, 5));
        assert_eq!(e.axis(), 0);
        assert_eq!(Edge::new(0, 8).axis(), 3);
    }
}
