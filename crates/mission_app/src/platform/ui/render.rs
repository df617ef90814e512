use mission_core::{
    AnalyzerView, AppViewModel, CounterView, LogCategory, LogRowView, ALERT_BODY, ALERT_TITLE,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::layout::{centered, dashboard_layout};
use super::theme::{self, AMBER, CYAN, EMERALD, RED, SLATE_200, TELEGRAM};

const INPUT_PLACEHOLDER: &str = "https://company.com";

pub fn render(frame: &mut Frame, view: &AppViewModel) {
    let area = frame.area();
    let layout = dashboard_layout(area);

    render_header(frame, layout.header);
    render_counter(frame, layout.counter, view);
    render_terminal(frame, layout.terminal, &view.log_rows);
    render_analysis(frame, layout.analysis, &view.analyzer);
    render_footer(frame, layout.footer);

    if view.alert_open {
        render_alert(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("● ", Style::default().fg(EMERALD)),
            Span::styled("SYSTEM ONLINE", theme::accent()),
        ]),
        Line::from(vec![
            Span::styled("MISSION ", Style::default().fg(SLATE_200).add_modifier(Modifier::BOLD)),
            Span::styled("CONTROL", theme::accent()),
        ]),
        Line::styled(
            "Sales Automation Dashboard • Real-time Lead Intelligence",
            theme::dim(),
        ),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_counter(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let counter: &CounterView = &view.counter;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let stats = view
        .stats
        .iter()
        .enumerate()
        .flat_map(|(i, stat)| {
            let color = [CYAN, AMBER, EMERALD][i % 3];
            let mut spans = Vec::with_capacity(3);
            if i > 0 {
                spans.push(Span::styled("   │   ", theme::dim()));
            }
            spans.push(Span::styled(
                stat.value.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(format!(" {}", stat.label.to_uppercase()), theme::dim()));
            spans
        })
        .collect::<Vec<_>>();

    let lines = vec![
        Line::styled(
            format_with_commas(counter.value),
            Style::default().fg(EMERALD).add_modifier(Modifier::BOLD),
        ),
        Line::styled(counter.label.to_uppercase(), theme::muted()),
        Line::default(),
        Line::from(stats),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_terminal(frame: &mut Frame, area: Rect, rows: &[LogRowView]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
        .title(Line::styled(" LIVE OPERATIONS ", theme::muted()))
        .title(
            Line::from(vec![
                Span::styled("● ", Style::default().fg(EMERALD)),
                Span::styled("LIVE TERMINAL ", theme::muted()),
            ])
            .right_aligned(),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Newest entries stay in view; one line is kept for the cursor.
    let visible = usize::from(inner.height.saturating_sub(1));
    let skip = rows.len().saturating_sub(visible);
    let mut lines: Vec<Line> = rows.iter().skip(skip).map(log_line).collect();
    lines.push(Line::styled("▌", Style::default().fg(EMERALD)));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn log_line(row: &LogRowView) -> Line<'static> {
    Line::from(vec![
        Span::styled(row.clock.clone(), theme::dim()),
        Span::raw(" "),
        Span::styled(row.text, Style::default().fg(category_color(row.category))),
    ])
}

fn category_color(category: LogCategory) -> ratatui::style::Color {
    match category {
        LogCategory::Success => EMERALD,
        LogCategory::Warning => AMBER,
        LogCategory::Error => RED,
        LogCategory::Info => CYAN,
    }
}

fn render_analysis(frame: &mut Frame, area: Rect, analyzer: &AnalyzerView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
        .title(Line::styled(" INTELLIGENCE ANALYSIS ", theme::muted()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Length(3), // input
            Constraint::Min(0),    // status / result
        ])
        .split(inner);

    let title = vec![
        Line::styled("Lead Analysis", Style::default().fg(SLATE_200).add_modifier(Modifier::BOLD)),
        Line::styled("Enter a company URL to analyze", theme::dim()),
    ];
    frame.render_widget(Paragraph::new(title), sections[0]);

    frame.render_widget(input_box(analyzer), sections[1]);
    frame.render_widget(
        Paragraph::new(analysis_body(analyzer)).wrap(Wrap { trim: false }),
        sections[2],
    );
}

fn input_box(analyzer: &AnalyzerView) -> Paragraph<'static> {
    let text = if analyzer.input.is_empty() {
        Span::styled(INPUT_PLACEHOLDER, theme::dim())
    } else if analyzer.busy {
        Span::styled(analyzer.input.clone(), theme::dim())
    } else {
        Span::styled(analyzer.input.clone(), Style::default().fg(SLATE_200))
    };
    let button_style = if analyzer.can_submit {
        theme::accent()
    } else {
        theme::dim()
    };
    let button = if analyzer.busy {
        spinner_frame(analyzer.spinner_frame)
    } else {
        "[Enter] Analyze"
    };
    Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border())
            .title(Line::styled(format!(" {button} "), button_style).right_aligned()),
    )
}

fn analysis_body(analyzer: &AnalyzerView) -> Text<'static> {
    if analyzer.busy {
        return Text::from(vec![Line::from(vec![
            Span::styled(
                format!("{} ", spinner_frame(analyzer.spinner_frame)),
                Style::default().fg(EMERALD),
            ),
            Span::styled("Analyzing company data...", theme::muted()),
        ])]);
    }
    let Some(result) = &analyzer.result else {
        return Text::default();
    };

    let mut lines = vec![
        Line::styled("✓ Analysis Complete!", theme::accent()),
        Line::default(),
        Line::from(vec![
            Span::styled("COMPANY      ", theme::dim()),
            Span::styled(result.company_name.clone(), Style::default().fg(SLATE_200)),
        ]),
        Line::from(vec![
            Span::styled("EMAIL FOUND  ", theme::dim()),
            Span::styled(result.email.clone(), Style::default().fg(EMERALD)),
        ]),
        Line::default(),
        Line::styled("Generated Email Draft", theme::muted()),
    ];
    lines.extend(
        result
            .draft_body
            .lines()
            .map(|line| Line::styled(line.to_string(), Style::default().fg(SLATE_200))),
    );
    lines.push(Line::default());
    lines.push(Line::styled("[Ctrl-R] Analyze Another Lead", theme::muted()));
    Text::from(lines)
}

fn spinner_frame(frame: usize) -> &'static str {
    theme::SPINNER[frame % theme::SPINNER.len()]
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("Powered by AI", theme::dim()),
        Span::styled(" • ", theme::dim()),
        Span::styled(concat!("v", env!("CARGO_PKG_VERSION")), theme::dim()),
        Span::styled(" • ", theme::dim()),
        Span::styled("All systems operational", theme::dim()),
        Span::raw("   "),
        Span::styled("Ctrl-T", Style::default().fg(TELEGRAM).add_modifier(Modifier::BOLD)),
        Span::styled(" Telegram Alert  ", theme::dim()),
        Span::styled("Ctrl-R", theme::accent()),
        Span::styled(" Reset  ", theme::dim()),
        Span::styled("Esc", Style::default().fg(RED).add_modifier(Modifier::BOLD)),
        Span::styled(" Quit", theme::dim()),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_alert(frame: &mut Frame, area: Rect) {
    let popup = centered(area, 64, 7);
    let lines = vec![
        Line::styled(ALERT_TITLE, Style::default().fg(TELEGRAM).add_modifier(Modifier::BOLD)),
        Line::default(),
        Line::styled(ALERT_BODY, Style::default().fg(SLATE_200)),
        Line::default(),
        Line::styled("[Enter] OK", theme::muted()),
    ];
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(TELEGRAM)),
            ),
        popup,
    );
}

pub fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mission_core::{update, AppState, AppViewModel, Msg};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::{format_with_commas, render};

    fn rendered(view: &AppViewModel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 48)).unwrap();
        terminal.draw(|frame| render(frame, view)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn commas_group_thousands() {
        assert_eq!(format_with_commas(0), "0");
        assert_eq!(format_with_commas(999), "999");
        assert_eq!(format_with_commas(12_450), "12,450");
        assert_eq!(format_with_commas(1_000_000), "1,000,000");
    }

    #[test]
    fn idle_dashboard_shows_chrome_and_placeholder() {
        let screen = rendered(&AppState::new().view());

        assert!(screen.contains("MISSION CONTROL"));
        assert!(screen.contains("LEADS SCRAPED"));
        assert!(screen.contains("847 EMAILS SENT"));
        assert!(screen.contains("https://company.com"));
        assert!(screen.contains("All systems operational"));
    }

    #[test]
    fn finished_counter_and_log_rows_are_drawn() {
        let at = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(8, 15, 30)
            .unwrap();
        let (state, _effects) = update(AppState::new(), Msg::Mounted);
        let (state, _effects) = update(state, Msg::CounterCompleted);
        let (state, _effects) = update(state, Msg::FeedTick { at });
        let screen = rendered(&state.view());

        assert!(screen.contains("12,450"));
        assert!(screen.contains("08:15:30 [SCAN] Initializing LinkedIn scraper..."));
    }

    #[test]
    fn result_and_alert_are_drawn() {
        let (state, _effects) = update(AppState::new(), Msg::InputChanged("example.com".into()));
        let (state, _effects) = update(state, Msg::AnalyzeSubmitted);
        let busy = rendered(&state.view());
        assert!(busy.contains("Analyzing company data..."));

        let (state, _effects) = update(state, Msg::AnalysisReady { request_id: 1 });
        let (state, _effects) = update(state, Msg::AlertClicked);
        let screen = rendered(&state.view());

        assert!(screen.contains("Analysis Complete!"));
        assert!(screen.contains("ceo@example.com"));
        assert!(screen.contains("Telegram Alert Sent!"));
    }
}
