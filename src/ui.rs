use crate::models::{Habit, HabitList};
use crate::stats::dashboard_summary_at;
use crate::store::day_key;
use chrono::{Datelike, NaiveDate};

const QUOTES: [&str; 6] = [
    "Small steps, big change.",
    "Consistency beats intensity.",
    "You don't need motivation, you need a system.",
    "Win the day, one habit at a time.",
    "Tiny gains compound into big wins.",
    "Discipline is remembering what you want.",
];

pub fn render_index(today: NaiveDate, list: &HabitList) -> String {
    let summary = dashboard_summary_at(today, list);
    let quote = QUOTES[today.num_days_from_ce() as usize % QUOTES.len()];

    INDEX_HTML
        .replace("{{DATE}}", &today.format("%A, %B %-d, %Y").to_string())
        .replace("{{QUOTE}}", quote)
        .replace("{{TODAY_COUNT}}", &summary.today_count.to_string())
        .replace("{{BEST_STREAK}}", &summary.best_streak.to_string())
        .replace("{{TOTAL_HABITS}}", &summary.total_habits.to_string())
        .replace("{{CARDS}}", &render_cards(today, list))
}

fn render_cards(today: NaiveDate, list: &HabitList) -> String {
    if list.habits.is_empty() {
        return r#"<p class="empty">Add a habit to see progress.</p>"#.to_string();
    }

    let key = day_key(today);
    list.habits
        .iter()
        .map(|habit| render_card(habit, &key))
        .collect()
}

fn render_card(habit: &Habit, today_key: &str) -> String {
    let done = habit.last_date.as_deref() == Some(today_key);
    let (check_class, check_label) = if done {
        ("check-btn done", "&#10003; Completed")
    } else {
        ("check-btn", "Mark as done")
    };

    format!(
        r#"<div class="habit-card">
  <form class="delete-form" method="post" action="/habits/{id}/delete">
    <button class="delete-btn" title="Delete" type="submit">&times;</button>
  </form>
  <div class="habit-header">
    <span class="habit-badge" style="color:{color}">&#128293; Streak: {streak}</span>
    <span class="category-tag">{category}</span>
  </div>
  <h3 class="habit-name" style="color:{color}">{name}</h3>
  <form method="post" action="/habits/{id}/toggle">
    <button class="{check_class}" type="submit">{check_label}</button>
  </form>
</div>
"#,
        id = habit.id,
        color = escape_html(&habit.color),
        streak = habit.streak,
        category = escape_html(&habit.category),
        name = escape_html(&habit.name),
    )
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>HabitPro</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef2ff;
      --bg-2: #c7d2fe;
      --ink: #1e293b;
      --primary: #4f46e5;
      --accent: #7c3aed;
      --good: #10b981;
      --bad: #ef4444;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(79, 70, 229, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f5f3ff 60%, #eef2ff 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(980px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
      color: var(--primary);
    }

    .subtitle {
      margin: 0;
      color: #64748b;
      font-size: 1rem;
    }

    .quote {
      margin: 0;
      font-style: italic;
      color: #475569;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(79, 70, 229, 0.1);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #94a3b8;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--primary);
    }

    .habit-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
      gap: 16px;
    }

    .empty {
      color: #94a3b8;
      text-align: center;
      grid-column: 1 / -1;
    }

    .habit-card {
      position: relative;
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(79, 70, 229, 0.1);
      display: grid;
      gap: 10px;
    }

    .habit-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
    }

    .habit-badge {
      font-weight: 600;
      font-size: 0.95rem;
    }

    .category-tag {
      background: rgba(79, 70, 229, 0.1);
      color: var(--primary);
      border-radius: 999px;
      padding: 4px 10px;
      font-size: 0.8rem;
    }

    .habit-name {
      margin: 0;
      font-size: 1.2rem;
    }

    .delete-form {
      position: absolute;
      top: 10px;
      right: 10px;
    }

    .delete-btn {
      background: transparent;
      border: none;
      color: #94a3b8;
      font-size: 1.2rem;
      cursor: pointer;
      padding: 2px 8px;
      box-shadow: none;
    }

    .delete-btn:hover {
      color: var(--bad);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .check-btn {
      width: 100%;
      background: var(--primary);
      color: white;
      box-shadow: 0 10px 24px rgba(79, 70, 229, 0.3);
    }

    .check-btn.done {
      background: var(--good);
      box-shadow: 0 10px 24px rgba(16, 185, 129, 0.3);
    }

    .add-form {
      display: grid;
      grid-template-columns: 2fr 1fr auto auto;
      gap: 12px;
      align-items: center;
    }

    .add-form input[type="text"],
    .add-form select {
      border: 1px solid rgba(79, 70, 229, 0.2);
      border-radius: 12px;
      padding: 12px 14px;
      font-size: 0.95rem;
      font-family: inherit;
    }

    .add-form input[type="color"] {
      width: 46px;
      height: 46px;
      border: none;
      border-radius: 12px;
      padding: 0;
      background: transparent;
      cursor: pointer;
    }

    .btn-add {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(124, 58, 237, 0.3);
    }

    .charts {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 16px;
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(79, 70, 229, 0.1);
      display: grid;
      gap: 8px;
    }

    .chart-card h2 {
      margin: 0;
      font-size: 1.1rem;
    }

    .chart-card svg {
      width: 100%;
      height: 220px;
      display: block;
    }

    .chart-card svg text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-label {
      fill: #7a819b;
      font-size: 11px;
    }

    .chart-grid {
      stroke: rgba(79, 70, 229, 0.12);
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .toast {
      position: fixed;
      bottom: 24px;
      left: 50%;
      transform: translateX(-50%);
      background: var(--ink);
      color: white;
      border-radius: 999px;
      padding: 10px 20px;
      font-size: 0.95rem;
      opacity: 0;
      transition: opacity 200ms ease;
      pointer-events: none;
    }

    .toast.show {
      opacity: 1;
    }

    .toast.error {
      background: var(--bad);
    }

    @media (max-width: 640px) {
      .app {
        padding: 28px 22px;
      }
      .add-form {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>HabitPro</h1>
      <p class="subtitle">{{DATE}}</p>
      <p class="quote">{{QUOTE}}</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Done today</span>
        <span class="value">{{TODAY_COUNT}}</span>
      </div>
      <div class="stat">
        <span class="label">Best streak</span>
        <span class="value">{{BEST_STREAK}}</span>
      </div>
      <div class="stat">
        <span class="label">Total habits</span>
        <span class="value">{{TOTAL_HABITS}}</span>
      </div>
    </section>

    <section class="habit-grid">
      {{CARDS}}
    </section>

    <form class="add-form" method="post" action="/habits/add">
      <input type="text" name="name" placeholder="New habit name" />
      <select name="category">
        <option value="General">General</option>
        <option value="Health">Health</option>
        <option value="Mind">Mind</option>
        <option value="Work">Work</option>
        <option value="Home">Home</option>
      </select>
      <input type="color" name="color" value="#4f46e5" />
      <button class="btn-add" type="submit">Add habit</button>
    </form>

    <section class="charts">
      <div class="chart-card">
        <h2>This week</h2>
        <svg id="weekly-chart" viewBox="0 0 320 220" role="img" aria-label="Weekly completions"></svg>
      </div>
      <div class="chart-card">
        <h2>Streaks</h2>
        <svg id="streak-chart" viewBox="0 0 320 220" role="img" aria-label="Streaks per habit"></svg>
      </div>
      <div class="chart-card">
        <h2>Today</h2>
        <svg id="ratio-chart" viewBox="0 0 320 220" role="img" aria-label="Completion ratio"></svg>
      </div>
    </section>
  </main>

  <div class="toast" id="toast"></div>

  <script>
    const weeklyEl = document.getElementById('weekly-chart');
    const streakEl = document.getElementById('streak-chart');
    const ratioEl = document.getElementById('ratio-chart');
    const toastEl = document.getElementById('toast');

    const NOTICES = {
      'added': { text: 'Habit added', type: 'ok' },
      'done': { text: 'Marked as done', type: 'ok' },
      'deleted': { text: 'Habit deleted', type: 'ok' },
      'already-done': { text: 'Already completed today', type: 'error' },
      'empty-name': { text: 'Enter a habit name', type: 'error' }
    };

    const showToast = (text, type) => {
      toastEl.textContent = text;
      toastEl.className = `toast show ${type === 'error' ? 'error' : ''}`;
      setTimeout(() => {
        toastEl.className = 'toast';
      }, 1800);
    };

    const notice = NOTICES[new URLSearchParams(location.search).get('notice')];
    if (notice) {
      showToast(notice.text, notice.type);
      history.replaceState(null, '', '/');
    }

    const noData = (el) => {
      el.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
    };

    const renderWeekly = (week) => {
      const width = 320;
      const height = 220;
      const paddingX = 24;
      const paddingY = 30;
      const max = Math.max(1, ...week.map((day) => day.completed));
      const slot = (width - paddingX * 2) / week.length;
      const barWidth = slot * 0.6;
      const scaleY = (height - paddingY * 2) / max;

      let bars = '';
      week.forEach((day, index) => {
        const barHeight = day.completed * scaleY;
        const x = paddingX + index * slot + (slot - barWidth) / 2;
        const y = height - paddingY - barHeight;
        bars += `<rect x="${x.toFixed(1)}" y="${y.toFixed(1)}" width="${barWidth.toFixed(1)}" height="${barHeight.toFixed(1)}" rx="4" fill="#4f46e5" />`;
        bars += `<text class="chart-label" x="${(x + barWidth / 2).toFixed(1)}" y="${height - paddingY + 16}" text-anchor="middle">${day.label}</text>`;
        if (day.completed > 0) {
          bars += `<text class="chart-label" x="${(x + barWidth / 2).toFixed(1)}" y="${(y - 6).toFixed(1)}" text-anchor="middle">${day.completed}</text>`;
        }
      });

      const baseline = `<line class="chart-grid" x1="${paddingX}" y1="${height - paddingY}" x2="${width - paddingX}" y2="${height - paddingY}" />`;
      weeklyEl.innerHTML = baseline + bars;
    };

    const renderStreaks = (streaks) => {
      if (!streaks.length) {
        noData(streakEl);
        return;
      }

      const width = 320;
      const height = 220;
      const paddingX = 28;
      const paddingY = 34;
      const max = Math.max(1, ...streaks.map((point) => point.streak));
      const xStep = streaks.length > 1 ? (width - paddingX * 2) / (streaks.length - 1) : 0;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value / max) * (height - paddingY * 2);

      const path = streaks
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(1)} ${y(point.streak).toFixed(1)}`)
        .join(' ');
      const circles = streaks
        .map((point, index) => `<circle class="chart-point" cx="${x(index).toFixed(1)}" cy="${y(point.streak).toFixed(1)}" r="4" />`)
        .join('');
      const labels = streaks
        .map((point, index) => {
          const name = point.name.length > 8 ? point.name.slice(0, 7) + '…' : point.name;
          return `<text class="chart-label" x="${x(index).toFixed(1)}" y="${height - paddingY + 16}" text-anchor="middle">${name}</text>`;
        })
        .join('');

      streakEl.innerHTML = `<path class="chart-line" d="${path}" />${circles}${labels}`;
    };

    const renderRatio = (ratio) => {
      const total = ratio.completed + ratio.pending;
      if (total === 0) {
        noData(ratioEl);
        return;
      }

      const cx = 160;
      const cy = 100;
      const r = 70;
      const share = ratio.completed / total;
      let arcs;
      if (share === 0 || share === 1) {
        arcs = `<circle cx="${cx}" cy="${cy}" r="${r}" fill="${share === 1 ? '#10b981' : '#ef4444'}" />`;
      } else {
        const angle = share * 2 * Math.PI;
        const endX = cx + r * Math.sin(angle);
        const endY = cy - r * Math.cos(angle);
        const large = share > 0.5 ? 1 : 0;
        arcs = `<circle cx="${cx}" cy="${cy}" r="${r}" fill="#ef4444" />` +
          `<path d="M ${cx} ${cy} L ${cx} ${cy - r} A ${r} ${r} 0 ${large} 1 ${endX.toFixed(1)} ${endY.toFixed(1)} Z" fill="#10b981" />`;
      }

      const legend = `<text class="chart-label" x="${cx}" y="${cy + r + 28}" text-anchor="middle">` +
        `${ratio.completed} completed / ${ratio.pending} pending</text>`;
      ratioEl.innerHTML = arcs + legend;
    };

    const loadStats = async () => {
      const res = await fetch('/api/stats');
      if (!res.ok) {
        throw new Error('Unable to load stats');
      }
      const stats = await res.json();
      renderWeekly(stats.week);
      renderStreaks(stats.streaks);
      renderRatio(stats.ratio);
    };

    loadStats().catch(() => {
      noData(weeklyEl);
      noData(streakEl);
      noData(ratioEl);
    });
  </script>
</body>
</html>
"##;
