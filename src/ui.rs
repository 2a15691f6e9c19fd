pub fn render_index(date: &str, habit_count: usize) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{HABIT_COUNT}}", &habit_count.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef2f7;
      --bg-2: #c9d9f0;
      --ink: #22272e;
      --accent: #5b5bd6;
      --accent-2: #2f4858;
      --good: #2d7a4b;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3ecfb 60%, #f2f5fa 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
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
    }

    .subtitle {
      margin: 0;
      color: #5f646c;
      font-size: 1rem;
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
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat span {
      display: block;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #848b95;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.streak {
      color: var(--accent);
    }

    .habit-form {
      display: flex;
      gap: 12px;
    }

    .habit-form input {
      flex: 1;
      border: 1px solid rgba(47, 72, 88, 0.18);
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-family: inherit;
    }

    .habit-form input:focus {
      outline: none;
      border-color: var(--accent);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 22px;
      font-size: 1rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 10px;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-add {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(91, 91, 214, 0.3);
    }

    .habit-list {
      display: grid;
      gap: 12px;
    }

    .habit {
      display: flex;
      align-items: center;
      gap: 14px;
      background: white;
      border-radius: 18px;
      padding: 14px 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .habit.done {
      background: #edf8f1;
      border-color: rgba(45, 122, 75, 0.25);
    }

    .habit .toggle {
      width: 38px;
      height: 38px;
      border-radius: 50%;
      padding: 0;
      background: white;
      border: 2px solid rgba(47, 72, 88, 0.2);
      color: transparent;
      flex: none;
    }

    .habit.done .toggle {
      background: var(--good);
      border-color: var(--good);
      color: white;
    }

    .habit .info {
      flex: 1;
      display: grid;
      gap: 2px;
    }

    .habit .name {
      font-weight: 600;
    }

    .habit.done .name {
      color: var(--good);
    }

    .habit .meta {
      font-size: 0.85rem;
      color: #848b95;
    }

    .habit .remove {
      background: transparent;
      color: #b3b9c2;
      padding: 6px 10px;
      font-size: 1.1rem;
    }

    .habit .remove:hover {
      color: #c63b2b;
    }

    .empty {
      text-align: center;
      color: #848b95;
      font-style: italic;
      padding: 24px 0;
    }

    .grid-area h2,
    .age-area h2 {
      margin: 0 0 12px;
      font-size: 1.4rem;
    }

    .week-grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 10px;
    }

    .day-cell {
      display: grid;
      place-items: center;
      gap: 6px;
      font-size: 0.8rem;
      color: #848b95;
    }

    .day-cell .box {
      width: 100%;
      aspect-ratio: 1;
      max-width: 56px;
      border-radius: 12px;
      display: grid;
      place-items: center;
      font-weight: 600;
      background: rgba(47, 72, 88, 0.08);
      color: #848b95;
    }

    .day-cell .box.some {
      background: var(--accent);
      color: white;
    }

    .day-cell .box.all {
      background: var(--good);
      color: white;
      box-shadow: 0 8px 16px rgba(45, 122, 75, 0.25);
    }

    .age-card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 16px;
    }

    .age-form {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      align-items: center;
    }

    .age-form input[type="date"] {
      border: 1px solid rgba(47, 72, 88, 0.18);
      border-radius: 12px;
      padding: 12px 14px;
      font-size: 1rem;
      font-family: inherit;
    }

    .age-result {
      display: none;
      grid-template-columns: repeat(auto-fit, minmax(120px, 1fr));
      gap: 12px;
    }

    .age-result.visible {
      display: grid;
    }

    .status {
      font-size: 0.95rem;
      color: #5f646c;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: var(--good);
    }

    .hint {
      margin: 0;
      color: #6f747c;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .habit-form {
        flex-direction: column;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Habit Tracker</h1>
      <p class="subtitle">Check habits off each day and keep the streak alive.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Today</span>
        <span id="date" class="value">{{DATE}}</span>
      </div>
      <div class="stat">
        <span class="label">Habits</span>
        <span id="habit-count" class="value">{{HABIT_COUNT}}</span>
      </div>
      <div class="stat">
        <span class="label">Best streak</span>
        <span id="best-streak" class="value streak">0</span>
      </div>
    </section>

    <form id="habit-form" class="habit-form">
      <input id="habit-name" type="text" placeholder="New habit... (e.g. Read 10 mins)" autocomplete="off" />
      <button class="btn-add" type="submit">Add habit</button>
    </form>

    <section class="habit-list" id="habit-list"></section>

    <section class="grid-area">
      <h2>Last 7 days</h2>
      <div class="week-grid" id="week-grid"></div>
    </section>

    <section class="age-area">
      <h2>Age calculator</h2>
      <div class="age-card">
        <form id="age-form" class="age-form">
          <label for="birth-date">Date of birth</label>
          <input id="birth-date" type="date" required />
          <button class="btn-add" type="submit">Calculate</button>
        </form>
        <div class="age-result" id="age-result">
          <div class="stat">
            <span class="label">Years</span>
            <span class="value" id="age-years">0</span>
          </div>
          <div class="stat">
            <span class="label">Months</span>
            <span class="value" id="age-months">0</span>
          </div>
          <div class="stat">
            <span class="label">Days</span>
            <span class="value" id="age-days">0</span>
          </div>
          <div class="stat">
            <span class="label">Next birthday</span>
            <span class="value streak" id="age-countdown">0</span>
          </div>
        </div>
      </div>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Completions are kept per calendar day (server time). A streak counts back from today, or from yesterday while today is still pending.</p>
  </main>

  <script>
    const listEl = document.getElementById('habit-list');
    const gridEl = document.getElementById('week-grid');
    const statusEl = document.getElementById('status');
    const habitCountEl = document.getElementById('habit-count');
    const bestStreakEl = document.getElementById('best-streak');
    const habitForm = document.getElementById('habit-form');
    const habitNameEl = document.getElementById('habit-name');
    const ageForm = document.getElementById('age-form');
    const birthDateEl = document.getElementById('birth-date');
    const ageResultEl = document.getElementById('age-result');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const request = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    const renderHabits = (habits) => {
      habitCountEl.textContent = habits.length;
      if (!habits.length) {
        listEl.innerHTML = '<p class="empty">No habits yet. Add the first one above.</p>';
        return;
      }

      listEl.innerHTML = '';
      habits.forEach((habit) => {
        const row = document.createElement('div');
        row.className = habit.completed_today ? 'habit done' : 'habit';

        const toggle = document.createElement('button');
        toggle.className = 'toggle';
        toggle.type = 'button';
        toggle.textContent = '✓';
        toggle.title = habit.completed_today ? 'Mark as not done today' : 'Mark as done today';
        toggle.addEventListener('click', () => toggleHabit(habit.id));

        const info = document.createElement('div');
        info.className = 'info';
        const name = document.createElement('span');
        name.className = 'name';
        name.textContent = habit.name;
        const meta = document.createElement('span');
        meta.className = 'meta';
        meta.textContent = `🔥 ${habit.streak} day streak · ${habit.total_completions} total · tracked ${habit.tracked_days}d`;
        info.append(name, meta);

        const remove = document.createElement('button');
        remove.className = 'remove';
        remove.type = 'button';
        remove.textContent = '×';
        remove.title = 'Remove habit';
        remove.addEventListener('click', () => deleteHabit(habit.id));

        row.append(toggle, info, remove);
        listEl.append(row);
      });
    };

    const renderStats = (stats) => {
      bestStreakEl.textContent = stats.best_streak;
      gridEl.innerHTML = '';
      stats.last_7_days.forEach((day) => {
        const cell = document.createElement('div');
        cell.className = 'day-cell';
        const box = document.createElement('div');
        box.className = 'box';
        if (day.all_done) {
          box.classList.add('all');
        } else if (day.completed > 0) {
          box.classList.add('some');
        }
        box.textContent = day.total ? `${day.completed}/${day.total}` : '-';
        const label = document.createElement('span');
        label.textContent = day.date.slice(5);
        cell.append(box, label);
        gridEl.append(cell);
      });
    };

    const refresh = async () => {
      const [habits, stats] = await Promise.all([
        request('/api/habits'),
        request('/api/stats')
      ]);
      renderHabits(habits);
      renderStats(stats);
    };

    const toggleHabit = async (id) => {
      try {
        await request(`/api/habits/${id}/toggle`, { method: 'POST' });
        await refresh();
        setStatus('Saved', 'ok');
        setTimeout(() => setStatus('', ''), 1200);
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const deleteHabit = async (id) => {
      try {
        await request(`/api/habits/${id}`, { method: 'DELETE' });
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    habitForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      const name = habitNameEl.value.trim();
      if (!name) {
        return;
      }
      try {
        await request('/api/habits', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ name })
        });
        habitNameEl.value = '';
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    ageForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      try {
        const age = await request(`/api/age?birth=${encodeURIComponent(birthDateEl.value)}`);
        document.getElementById('age-years').textContent = age.years;
        document.getElementById('age-months').textContent = age.months;
        document.getElementById('age-days').textContent = age.days;
        document.getElementById('age-countdown').textContent = `${age.days_until_next_anniversary}d`;
        ageResultEl.classList.add('visible');
        setStatus('', '');
      } catch (err) {
        ageResultEl.classList.remove('visible');
        setStatus(err.message, 'error');
      }
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
