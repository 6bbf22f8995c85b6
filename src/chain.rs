use crate::Coords;

/// Stable handle of a segment inside a [`SegmentChain`]. Ids are never reused
/// since segments are never removed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SegmentId(usize);

impl SegmentId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
pub struct Segment {
    pos: Coords,
    next: Option<SegmentId>, // toward the tail
    prev: Option<SegmentId>, // toward the head
}

impl Segment {
    pub fn pos(&self) -> Coords {
        self.pos
    }

    pub fn next(&self) -> Option<SegmentId> {
        self.next
    }

    pub fn prev(&self) -> Option<SegmentId> {
        self.prev
    }
}

/// Doubly-linked list of segments stored in an arena. The head is always
/// the first segment created and the chain is never empty.
#[derive(Clone, Debug)]
pub struct SegmentChain {
    segments: Vec<Segment>,
    head: SegmentId,
    tail: SegmentId,
}

impl SegmentChain {
    pub fn new(head: Coords) -> Self {
        let segments = vec![Segment { pos: head, next: None, prev: None }];
        SegmentChain { segments, head: SegmentId(0), tail: SegmentId(0) }
    }

    pub fn head(&self) -> SegmentId {
        self.head
    }

    pub fn tail(&self) -> SegmentId {
        self.tail
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, id: SegmentId) -> &Segment {
        &self.segments[id.0]
    }

    pub fn position(&self, id: SegmentId) -> Coords {
        self.segments[id.0].pos
    }

    pub fn set_position(&mut self, id: SegmentId, pos: Coords) {
        self.segments[id.0].pos = pos;
    }

    pub fn next(&self, id: SegmentId) -> Option<SegmentId> {
        self.segments[id.0].next
    }

    pub fn prev(&self, id: SegmentId) -> Option<SegmentId> {
        self.segments[id.0].prev
    }

    /// Links a new segment right behind the head and returns its id.
    pub fn insert_after_head(&mut self, pos: Coords) -> SegmentId {
        let id = SegmentId(self.segments.len());
        let old_next = self.next(self.head);

        self.segments.push(Segment { pos, next: old_next, prev: Some(self.head) });
        self.segments[self.head.0].next = Some(id);

        match old_next {
            Some(next) => self.segments[next.0].prev = Some(id),
            None => self.tail = id,
        }

        id
    }

    /// Segment ids from head to tail.
    pub fn ids(&self) -> Ids<'_> {
        Ids { chain: self, cursor: Some(self.head), remaining: self.len() }
    }

    /// Segment positions from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = Coords> + '_ {
        self.ids().map(move |id| self.position(id))
    }
}

pub struct Ids<'a> {
    chain: &'a SegmentChain,
    cursor: Option<SegmentId>,
    remaining: usize,
}

impl<'a> Iterator for Ids<'a> {
    type Item = SegmentId;

    fn next(&mut self) -> Option<SegmentId> {
        // Bounded by the arena size so a broken link can never loop forever
        if self.remaining == 0 {
            return None;
        }

        let id = self.cursor?;
        self.cursor = self.chain.next(id);
        self.remaining -= 1;
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}
