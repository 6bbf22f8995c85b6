use crate::error::{Error, Result};
use crate::game::{CellKind, Snapshot};
use crate::TermInt;
use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

pub type ScreenPos = (TermInt, TermInt);

const SNAKE_BODY_CHAR: char = '█';
const FOOD_CHAR: char = 'O';
const DEAD_SNAKE_CHAR: char = 'X';
const EMPTY_CHAR: char = ' ';

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    screen: Vec<char>,
    current_msg: Option<Message>,
    board: ScreenPos, // board size in cells, border excluded
}

struct Message {
    top_left: ScreenPos,
    width: TermInt,
    height: TermInt,
    lines: Vec<String>,
}

impl TermManager {
    /// Checks that a `board_width` x `board_length` board, its border and the
    /// score line fit in the terminal.
    pub fn new(board_width: i32, board_length: i32) -> Result<Self> {
        let (width, height) = terminal::size()?;
        let board = (board_width as TermInt, board_length as TermInt);
        let (need_w, need_h) = (board.0 + 2, board.1 + 3);

        if width < need_w || height < need_h {
            return Err(Error::TerminalTooSmall { have_w: width, have_h: height, need_w, need_h });
        }

        let screen = vec![EMPTY_CHAR; width as usize * height as usize];
        Ok(TermManager { width, height, stdout: stdout(), screen, current_msg: None, board })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        Ok(())
    }

    pub fn read_key_blocking(&self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }

    pub fn read_key_events_queue(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1))? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    pub fn draw_borders(&mut self) -> Result<()> {
        let (width, height) = (self.board.0 + 2, self.board.1 + 2);
        let end_x = width - 1;
        let end_y = height - 1;

        for x in 0..width {
            let ch = if x == 0 || x == end_x {'+'} else {'-'};
            self.print_at((x, 0), ch)?;
            self.print_at((x, end_y), ch)?;
        }

        for y in 1..end_y {
            self.print_at((0, y), '|')?;
            self.print_at((end_x, y), '|')?;
        }

        self.flush()
    }

    /// Redraws the inside of the board and the score line from `snap`.
    pub fn draw_snapshot(&mut self, snap: &Snapshot, dead: bool) -> Result<()> {
        for y in 0..self.board.1 {
            for x in 0..self.board.0 {
                self.print_at((x + 1, y + 1), EMPTY_CHAR)?;
            }
        }

        for &((x, y), kind) in &snap.cells {
            let ch = match kind {
                CellKind::Food => FOOD_CHAR,
                _ if dead => DEAD_SNAKE_CHAR,
                CellKind::Head => snap.direction.head_char(),
                CellKind::Body => SNAKE_BODY_CHAR,
            };
            self.print_at((x as TermInt + 1, y as TermInt + 1), ch)?;
        }

        let score = format!("Score: {}", snap.score);
        let score_y = self.board.1 + 2;
        for x in 0..self.board.0 + 2 {
            let ch = score.chars().nth(x as usize).unwrap_or(EMPTY_CHAR);
            self.print_at((x, score_y), ch)?;
        }

        if self.has_message() {
            self.redraw_message()?;
        }

        self.flush()
    }

    pub fn show_message(&mut self, lines: &[&str]) -> Result<()> {
        if self.has_message() {
            self.hide_message()?;
        }

        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 2) as TermInt;
        let center = ((self.board.0 + 2) / 2, (self.board.1 + 2) / 2);
        let top_left = (
            center.0.saturating_sub(msg_width / 2),
            center.1.saturating_sub(msg_height / 2),
        );

        let lines = lines.iter().map(|line| line.to_string()).collect();
        self.current_msg = Some(Message::new(msg_width, msg_height, top_left, lines));
        self.redraw_message()?;
        self.flush()
    }

    pub fn hide_message(&mut self) -> Result<()> {
        let msg = match self.current_msg.take() {
            Some(msg) => msg,
            None => return Ok(()),
        };
        let top_left = msg.top_left();

        // Restore the content from the screen buffer
        for y_diff in 0..msg.height() {
            for x_diff in 0..msg.width() {
                let (x, y) = (top_left.0 + x_diff, top_left.1 + y_diff);
                if x >= self.width || y >= self.height {
                    continue;
                }
                let ch = self.screen[self.width as usize * y as usize + x as usize];
                self.print_at_no_save((x, y), ch)?;
            }
        }

        self.flush()
    }

    pub fn print_at(&mut self, pos: ScreenPos, ch: char) -> Result<()> {
        if pos.0 >= self.width || pos.1 >= self.height {
            return Ok(());
        }
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))?;
        self.screen[self.width as usize * pos.1 as usize + pos.0 as usize] = ch;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))?;
        self.screen = vec![EMPTY_CHAR; self.width as usize * self.height as usize];
        self.current_msg = None;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    pub fn has_message(&self) -> bool {
        self.current_msg.is_some()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn redraw_message(&mut self) -> Result<()> {
        let msg = match self.current_msg.take() {
            Some(msg) => msg,
            None => return Ok(()),
        };
        let top_left = msg.top_left();

        // Print the top and bottom empty lines
        for y in [top_left.1, top_left.1 + msg.height() - 1].iter() {
            for x_diff in 0..msg.width() {
                self.print_at_no_save((top_left.0 + x_diff, *y), ' ')?;
            }
        }

        // Print the message lines
        for (i, line) in msg.lines().iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg.width() as usize);
            let y = top_left.1 + i as TermInt + 1;
            for (x_diff, ch) in padded_line.chars().enumerate() {
                self.print_at_no_save((top_left.0 + x_diff as TermInt, y), ch)?;
            }
        }

        self.current_msg = Some(msg);
        Ok(())
    }

    fn print_at_no_save(&mut self, pos: ScreenPos, ch: char) -> Result<()> {
        // To be used for printing messages, where we don't wanna overwrite our
        // local buffer to restore it when the message is hidden
        if pos.0 >= self.width || pos.1 >= self.height {
            return Ok(());
        }
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))?;
        Ok(())
    }
}

impl Message {
    pub fn new(width: TermInt, height: TermInt, top_left: ScreenPos, lines: Vec<String>) -> Self {
        Message { width, height, top_left, lines }
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn top_left(&self) -> ScreenPos {
        self.top_left
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
